//! Loopback tests for the TCP transport and its receive task.

use std::time::{Duration, Instant};

use ircc_proto::{Command, Outbound, ParseError};
use ircc_tui::transport::{self, Inbound, JOIN_TIMEOUT};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::mpsc,
    time::timeout,
};

const WAIT: Duration = Duration::from_secs(5);

async fn pair() -> (transport::Connection, mpsc::Receiver<Inbound>, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr").to_string();

    let (client, server) = tokio::join!(transport::connect(&addr), listener.accept());
    let (connection, inbox) = client.expect("connect");
    let (server, _) = server.expect("accept");
    (connection, inbox, server)
}

async fn next(inbox: &mut mpsc::Receiver<Inbound>) -> Inbound {
    timeout(WAIT, inbox.recv()).await.expect("inbound within timeout").expect("inbox open")
}

#[tokio::test]
async fn lines_split_across_writes_arrive_whole() {
    let (mut connection, mut inbox, mut server) = pair().await;

    server.write_all(b":irc.test 001 alice :Welcome\r\n:bob!b@h PRI").await.expect("write");
    server.flush().await.expect("flush");
    tokio::time::sleep(Duration::from_millis(20)).await;
    server.write_all(b"VMSG #c :split line\r\ngarbage\r\n").await.expect("write");

    let Inbound::Message(welcome) = next(&mut inbox).await else { panic!("expected message") };
    assert_eq!(welcome.numeric_code(), Some(1));

    let Inbound::Message(privmsg) = next(&mut inbox).await else { panic!("expected message") };
    assert_eq!(privmsg.command(), Some(&Command::Privmsg));
    assert_eq!(privmsg.sender.as_deref(), Some("bob"));
    assert_eq!(privmsg.trailing, "split line");

    let Inbound::Malformed { line, error } = next(&mut inbox).await else {
        panic!("expected malformed line")
    };
    assert_eq!(line, "garbage");
    assert_eq!(error, ParseError::NoSpace);

    connection.shutdown().await;
}

#[tokio::test]
async fn eof_is_reported_once() {
    let (mut connection, mut inbox, server) = pair().await;
    drop(server);

    assert!(matches!(next(&mut inbox).await, Inbound::Closed { .. }));
    assert!(timeout(WAIT, inbox.recv()).await.expect("inbox closes").is_none());

    connection.shutdown().await;
}

#[tokio::test]
async fn send_line_writes_crlf_terminated_command() {
    let (mut connection, _inbox, mut server) = pair().await;

    connection.send_line(&Outbound::Nick("alice".into())).await.expect("send");
    connection
        .send_line(&Outbound::Privmsg { target: "#c".into(), text: "hi".into() })
        .await
        .expect("send");

    let expected = b"NICK alice\r\nPRIVMSG #c :hi\r\n";
    let mut received = vec![0u8; expected.len()];
    timeout(WAIT, server.read_exact(&mut received)).await.expect("read in time").expect("read");
    assert_eq!(received, expected);

    connection.shutdown().await;
}

#[tokio::test]
async fn shutdown_stops_receive_task_promptly() {
    let (mut connection, mut inbox, _server) = pair().await;

    let started = Instant::now();
    connection.shutdown().await;
    assert!(started.elapsed() < JOIN_TIMEOUT);

    // The task dropped its sender without reporting a close.
    assert!(timeout(WAIT, inbox.recv()).await.expect("inbox closes").is_none());

    // Second shutdown is a no-op.
    connection.shutdown().await;
}

#[tokio::test]
async fn shutdown_is_prompt_with_full_inbox() {
    let (mut connection, _inbox, mut server) = pair().await;

    let flood: Vec<u8> = (0..400).flat_map(|i| format!("PING :{i}\r\n").into_bytes()).collect();
    server.write_all(&flood).await.expect("write");
    server.flush().await.expect("flush");
    // Let the receive task fill the inbox and block on it.
    tokio::time::sleep(Duration::from_millis(200)).await;

    let started = Instant::now();
    connection.shutdown().await;
    assert!(started.elapsed() < JOIN_TIMEOUT);
}

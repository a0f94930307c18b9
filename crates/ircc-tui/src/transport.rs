//! TCP transport and the background receive task.
//!
//! [`Connection`] owns the socket write half. The read half moves into a
//! spawned receive task that frames and parses server lines and forwards them
//! to the owner as [`Inbound`] values over a bounded channel. The receive task
//! never touches App state and never exits the process: a closed or failed
//! socket becomes [`Inbound::Closed`] and the owner decides what happens.
//!
//! # Shutdown
//!
//! Two phases: [`Connection::shutdown`] signals the task through a watch
//! channel, then joins it for at most [`JOIN_TIMEOUT`] before aborting it.
//! The write half is shut down last.

use std::{io, net::SocketAddr, time::Duration};

use bytes::BytesMut;
use ircc_proto::{LineFramer, Message, Outbound, ParseError};
use thiserror::Error;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::{mpsc, watch},
    task::JoinHandle,
};

/// Longest wait for the receive task to stop before it is aborted.
pub const JOIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Bytes requested per socket read.
const READ_CHUNK: usize = 4096;

/// Lines buffered between the receive task and the owner.
const INBOX_CAPACITY: usize = 256;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        /// Address dialed.
        addr: String,
        /// Underlying error.
        source: io::Error,
    },

    /// Socket I/O failed.
    #[error("socket I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A framed server line delivered to the owner task.
#[derive(Debug, Clone)]
pub enum Inbound {
    /// Parsed line.
    Message(Message),
    /// Line that failed to parse.
    Malformed {
        /// The framed line.
        line: String,
        /// Parser error.
        error: ParseError,
    },
    /// Socket reached EOF or failed. Always the last value sent.
    Closed {
        /// What happened.
        reason: String,
    },
}

/// Live connection to the server.
pub struct Connection {
    writer: OwnedWriteHalf,
    shutdown_tx: watch::Sender<bool>,
    receiver: Option<JoinHandle<()>>,
    peer: SocketAddr,
}

/// Connect to `addr` (host:port) and start the receive task.
///
/// # Errors
///
/// Returns [`TransportError::Connect`] if the TCP connection fails.
pub async fn connect(addr: &str) -> Result<(Connection, mpsc::Receiver<Inbound>), TransportError> {
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| TransportError::Connect { addr: addr.to_owned(), source })?;
    let (connection, inbox) = Connection::start(stream)?;
    tracing::info!(peer = %connection.peer(), "connected");
    Ok((connection, inbox))
}

impl Connection {
    /// Split an established stream and spawn its receive task.
    ///
    /// # Errors
    ///
    /// Returns an error if the peer address cannot be read.
    pub fn start(stream: TcpStream) -> Result<(Self, mpsc::Receiver<Inbound>), TransportError> {
        let peer = stream.peer_addr()?;
        let (reader, writer) = stream.into_split();
        let (inbox_tx, inbox_rx) = mpsc::channel(INBOX_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let receiver = tokio::spawn(receive_loop(reader, inbox_tx, shutdown_rx));

        Ok((Self { writer, shutdown_tx, receiver: Some(receiver), peer }, inbox_rx))
    }

    /// Encode and write one command.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn send_line(&mut self, command: &Outbound) -> Result<(), TransportError> {
        self.writer.write_all(&command.to_wire()).await?;
        Ok(())
    }

    /// Stop the receive task and close the write half.
    ///
    /// Idempotent.
    pub async fn shutdown(&mut self) {
        let Some(handle) = self.receiver.take() else {
            return;
        };

        // Err only means the task already ended and dropped its receiver.
        let _ = self.shutdown_tx.send(true);

        let abort = handle.abort_handle();
        match tokio::time::timeout(JOIN_TIMEOUT, handle).await {
            Ok(Ok(())) => tracing::debug!("receive task stopped"),
            Ok(Err(error)) => tracing::warn!(%error, "receive task failed"),
            Err(_) => {
                tracing::warn!(timeout = ?JOIN_TIMEOUT, "receive task did not stop, aborting");
                abort.abort();
            },
        }

        if let Err(error) = self.writer.shutdown().await {
            tracing::debug!(%error, "write half already closed");
        }
    }

    /// Remote address.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }
}

/// Read, frame and parse until EOF, error, or shutdown.
async fn receive_loop(
    mut reader: OwnedReadHalf,
    inbox: mpsc::Sender<Inbound>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut framer = LineFramer::new();
    let mut chunk = BytesMut::with_capacity(READ_CHUNK);

    loop {
        chunk.clear();
        let read = tokio::select! {
            biased;

            _ = shutdown.changed() => {
                tracing::debug!("receive task shutting down");
                return;
            }

            read = reader.read_buf(&mut chunk) => read,
        };

        let reason = match read {
            Ok(0) => "connection closed by server".to_owned(),
            Ok(_) => {
                framer.push(&chunk);
                for line in framer.lines() {
                    tracing::trace!(%line, "received");
                    let inbound = match Message::parse(&line) {
                        Ok(message) => Inbound::Message(message),
                        Err(error) => Inbound::Malformed { line, error },
                    };
                    if !forward(&inbox, &mut shutdown, inbound).await {
                        return;
                    }
                }
                continue;
            },
            Err(error) => format!("read failed: {error}"),
        };

        tracing::info!(%reason, "connection ended");
        forward(&inbox, &mut shutdown, Inbound::Closed { reason }).await;
        return;
    }
}

/// Deliver one value to the owner. A full inbox blocks only until shutdown
/// is signalled. Returns `false` if the value was not delivered.
async fn forward(
    inbox: &mpsc::Sender<Inbound>,
    shutdown: &mut watch::Receiver<bool>,
    inbound: Inbound,
) -> bool {
    tokio::select! {
        biased;

        _ = shutdown.changed() => {
            tracing::debug!("receive task shutting down with a full inbox");
            false
        }

        sent = inbox.send(inbound) => sent.is_ok(),
    }
}

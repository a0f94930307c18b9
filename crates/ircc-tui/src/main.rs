//! ircc entry point.
//!
//! # Usage
//!
//! ```bash
//! # Connect to a server
//! ircc irc.example.net --nick alice
//!
//! # Connect to the default server on another port, with the debug pane
//! ircc --server --port 7000 --debug
//! ```

#![allow(clippy::print_stderr)]

use std::{error::Error, fs::File, io, process::ExitCode, sync::Mutex};

use clap::Parser;
use ircc_tui::{
    App, AppEvent, Args, ClientConfig, Exit, Runtime, TerminalDriver, transport,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ircc: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("ircc: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    // The terminal is restored before anything is printed here.
    match run(config).await {
        Ok(Exit::Quit) => ExitCode::SUCCESS,
        Ok(Exit::Fatal { reason }) => {
            eprintln!("ircc: {reason}");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("ircc: {e}");
            ExitCode::FAILURE
        },
    }
}

async fn run(config: ClientConfig) -> Result<Exit, Box<dyn Error>> {
    tracing::info!(addr = %config.addr(), nickname = %config.nickname, "ircc starting");

    let (connection, inbox) = transport::connect(&config.addr()).await?;
    let driver = TerminalDriver::new(connection, inbox)?;

    let mut app = App::new(config.app_config());
    let (cols, rows) = driver.size()?;
    let _ = app.handle(AppEvent::Resize(cols, rows));

    let mut runtime = Runtime::new(driver, app);
    Ok(runtime.run().await?)
}

/// Log to `--log-file` when given. Without a file no subscriber is installed,
/// since stderr shares the alternate screen.
fn init_logging(config: &ClientConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::options().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

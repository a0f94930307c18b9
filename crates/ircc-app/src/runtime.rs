//! Generic runtime for application orchestration.
//!
//! The Runtime owns the [`App`] and drives it with events from a [`Driver`].
//! Being the sole owner is what makes the client single-writer: the receive
//! task and the terminal only ever produce events, and the Runtime applies
//! them in order.
//!
//! # Shutdown
//!
//! Whatever ends the loop (operator quit, fatal server event, driver error)
//! the Runtime calls [`Driver::shutdown`] exactly once before returning. Events
//! queued behind a fatal event are never applied.

use crate::{App, AppAction, Driver};

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// Operator asked to quit.
    Quit,
    /// Connection ended unrecoverably.
    Fatal {
        /// What ended the session.
        reason: String,
    },
}

impl Exit {
    /// Session ended with a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}

/// Event loop that owns the App and executes its actions on a Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime. The driver must already be connected.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Register with the server and run until the session ends.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if input, output or rendering fails. The
    /// driver has been shut down in that case as well.
    pub async fn run(&mut self) -> Result<Exit, D::Error> {
        let result = self.event_loop().await;
        self.driver.shutdown().await;

        match &result {
            Ok(exit) => tracing::info!(?exit, "session ended"),
            Err(error) => tracing::error!(%error, "driver failed"),
        }
        result
    }

    async fn event_loop(&mut self) -> Result<Exit, D::Error> {
        self.driver.render(&self.app)?;

        let actions = self.app.register();
        if let Some(exit) = self.process_actions(actions).await? {
            return Ok(exit);
        }

        while let Some(event) = self.driver.next_event().await? {
            let actions = self.app.handle(event);
            if let Some(exit) = self.process_actions(actions).await? {
                return Ok(exit);
            }
        }

        Ok(Exit::Quit)
    }

    /// Execute actions in order. Returns the exit reason if one ends the loop.
    async fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<Option<Exit>, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Send(command) => {
                    tracing::debug!(%command, "sending");
                    self.driver.send(command).await?;
                },
                AppAction::Quit => return Ok(Some(Exit::Quit)),
                AppAction::Fatal { reason } => return Ok(Some(Exit::Fatal { reason })),
            }
        }
        Ok(None)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

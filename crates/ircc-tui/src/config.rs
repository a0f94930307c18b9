//! Command-line configuration.
//!
//! [`Args`] is the raw clap surface. [`Args::resolve`] validates it into a
//! [`ClientConfig`] before any connection is attempted.

use std::path::PathBuf;

use clap::Parser;
use ircc_app::AppConfig;
use thiserror::Error;

/// Address used by `--server` when no host is given.
pub const FALLBACK_SERVER: &str = "54.86.211.170";

/// Default server port.
pub const DEFAULT_PORT: u16 = 6667;

/// Default login name sent with USER.
pub const DEFAULT_USERNAME: &str = "cs3357";

/// Nickname used when none is given and the environment has no user name.
pub const DEFAULT_NICKNAME: &str = "guest";

/// Longest accepted server name, in bytes.
pub const MAX_SERVER_NAME: usize = 63;

/// Configuration errors, reported before connecting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a server name nor `--server` was given.
    #[error("no server given: pass a SERVER argument or --server")]
    MissingServer,

    /// Server name exceeds [`MAX_SERVER_NAME`].
    #[error("server name is {len} bytes long (maximum {MAX_SERVER_NAME})")]
    ServerNameTooLong {
        /// Length of the given name.
        len: usize,
    },

    /// Nickname is empty or contains whitespace.
    #[error("invalid nickname: {0:?}")]
    InvalidNickname(String),
}

/// Terminal IRC client
#[derive(Parser, Debug, Clone)]
#[command(name = "ircc")]
#[command(about = "Terminal client for IRC servers")]
#[command(version)]
pub struct Args {
    /// Server host name or address
    #[arg(value_name = "SERVER")]
    pub host: Option<String>,

    /// Connect to the default server
    #[arg(short = 's', long = "server", conflicts_with = "host")]
    pub default_server: bool,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Show the debug pane with every received line
    #[arg(short, long)]
    pub debug: bool,

    /// Nickname (defaults to $USER)
    #[arg(short, long)]
    pub nick: Option<String>,

    /// Login name sent at registration
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Real name sent at registration (defaults to the nickname)
    #[arg(long)]
    pub realname: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Initial nickname.
    pub nickname: String,
    /// Login name.
    pub username: String,
    /// Real name.
    pub realname: String,
    /// Show the debug pane.
    pub debug: bool,
    /// Log file. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Default log filter.
    pub log_level: String,
}

impl Args {
    /// Validate using the process environment for the default nickname.
    ///
    /// # Errors
    ///
    /// See [`Args::resolve`].
    pub fn into_config(self) -> Result<ClientConfig, ConfigError> {
        self.resolve(|key| std::env::var(key).ok())
    }

    /// Validate, looking up environment variables through `env`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingServer`] if no server was selected
    /// - [`ConfigError::ServerNameTooLong`] if the host exceeds
    ///   [`MAX_SERVER_NAME`] bytes
    /// - [`ConfigError::InvalidNickname`] for an empty or spaced nickname
    pub fn resolve(self, env: impl Fn(&str) -> Option<String>) -> Result<ClientConfig, ConfigError> {
        let host = match (self.host, self.default_server) {
            (Some(host), _) if !host.is_empty() => host,
            (_, true) => FALLBACK_SERVER.to_owned(),
            _ => return Err(ConfigError::MissingServer),
        };
        if host.len() > MAX_SERVER_NAME {
            return Err(ConfigError::ServerNameTooLong { len: host.len() });
        }

        let nickname = self
            .nick
            .or_else(|| env("USER"))
            .or_else(|| env("LOGNAME"))
            .unwrap_or_else(|| DEFAULT_NICKNAME.to_owned());
        if nickname.is_empty() || nickname.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidNickname(nickname));
        }

        let realname = self.realname.unwrap_or_else(|| nickname.clone());

        Ok(ClientConfig {
            host,
            port: self.port,
            nickname,
            username: self.username,
            realname,
            debug: self.debug,
            log_file: self.log_file,
            log_level: self.log_level,
        })
    }
}

impl ClientConfig {
    /// `host:port` for connecting.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configuration for the App state machine.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            server_addr: self.addr(),
            nickname: self.nickname.clone(),
            username: self.username.clone(),
            realname: self.realname.clone(),
            debug: self.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ircc").chain(args.iter().copied())).unwrap()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn positional_server_with_defaults() {
        let config = parse(&["irc.example.net"]).resolve(no_env).unwrap();

        assert_eq!(config.addr(), "irc.example.net:6667");
        assert_eq!(config.nickname, DEFAULT_NICKNAME);
        assert_eq!(config.username, "cs3357");
        assert_eq!(config.realname, DEFAULT_NICKNAME);
        assert!(!config.debug);
    }

    #[test]
    fn server_flag_uses_fallback_address() {
        let config = parse(&["-s", "-p", "7000", "-d"]).resolve(no_env).unwrap();

        assert_eq!(config.addr(), "54.86.211.170:7000");
        assert!(config.debug);
    }

    #[test]
    fn missing_server_is_an_error() {
        assert_eq!(parse(&[]).resolve(no_env), Err(ConfigError::MissingServer));
    }

    #[test]
    fn long_server_name_is_rejected() {
        let host = "a".repeat(MAX_SERVER_NAME + 1);
        assert_eq!(
            parse(&[host.as_str()]).resolve(no_env),
            Err(ConfigError::ServerNameTooLong { len: MAX_SERVER_NAME + 1 })
        );

        let host = "a".repeat(MAX_SERVER_NAME);
        assert!(parse(&[host.as_str()]).resolve(no_env).is_ok());
    }

    #[test]
    fn nickname_falls_back_through_environment() {
        let env = |key: &str| (key == "LOGNAME").then(|| "logname".to_owned());
        assert_eq!(parse(&["h"]).resolve(env).unwrap().nickname, "logname");

        let env = |key: &str| Some(key.to_lowercase());
        assert_eq!(parse(&["h"]).resolve(env).unwrap().nickname, "user");

        let config = parse(&["h", "-n", "alice", "--realname", "Alice A"]).resolve(env).unwrap();
        assert_eq!(config.nickname, "alice");
        assert_eq!(config.realname, "Alice A");
    }

    #[test]
    fn nickname_with_space_is_rejected() {
        assert!(matches!(
            parse(&["h", "-n", "a b"]).resolve(no_env),
            Err(ConfigError::InvalidNickname(_))
        ));
    }

    #[test]
    fn server_flag_conflicts_with_host() {
        assert!(Args::try_parse_from(["ircc", "-s", "irc.example.net"]).is_err());
    }
}

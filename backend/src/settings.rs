//! Process configuration.
//!
//! Command-line flags take precedence over the `DATABASE_URL`, `PORT` and
//! `HOST` environment variables. Without a database URL the service runs over
//! the in-memory document store.

use std::net::{SocketAddr, ToSocketAddrs};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

const DATABASE_URL_VAR: &str = "DATABASE_URL";
const PORT_VAR: &str = "PORT";
const HOST_VAR: &str = "HOST";

/// Command-line flags for the server binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "booking-backend", about = "Hotel booking HTTP backend")]
pub struct CliArgs {
    /// PostgreSQL connection URL. Falls back to `DATABASE_URL`.
    #[arg(long)]
    pub database_url: Option<String>,
    /// Listening port. Falls back to `PORT`, then 8000.
    #[arg(long)]
    pub port: Option<u16>,
    /// Listening host. Falls back to `HOST`, then 0.0.0.0.
    #[arg(long)]
    pub host: Option<String>,
}

/// Errors raised while resolving [`AppSettings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name} must not be blank")]
    Blank { name: &'static str },
    #[error("{PORT_VAR} is not a valid port: {value}")]
    InvalidPort { value: String },
    #[error("cannot resolve listen address {host}:{port}")]
    UnresolvableAddress { host: String, port: u16 },
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    database_url: Option<String>,
    host: String,
    port: u16,
}

impl AppSettings {
    /// Resolve flags against the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] for blank values or an unparsable `PORT`.
    pub fn from_cli(args: CliArgs) -> Result<Self, SettingsError> {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    /// Resolve flags against an arbitrary variable lookup.
    ///
    /// # Examples
    /// ```
    /// use booking_backend::settings::{AppSettings, CliArgs};
    ///
    /// let settings = AppSettings::resolve(CliArgs::default(), |_| None).unwrap();
    /// assert_eq!(settings.port(), 8000);
    /// assert!(settings.database_url().is_none());
    /// ```
    pub fn resolve(
        args: CliArgs,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let database_url = args
            .database_url
            .or_else(|| lookup(DATABASE_URL_VAR))
            .map(|url| not_blank(url, DATABASE_URL_VAR))
            .transpose()?;

        let host = args
            .host
            .or_else(|| lookup(HOST_VAR))
            .map(|host| not_blank(host, HOST_VAR))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match args.port {
            Some(port) => port,
            None => match lookup(PORT_VAR) {
                Some(raw) => parse_port(&raw)?,
                None => DEFAULT_PORT,
            },
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// First socket address the configured host resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnresolvableAddress`] when the host does not
    /// resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let unresolvable = || SettingsError::UnresolvableAddress {
            host: self.host.clone(),
            port: self.port,
        };
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|_| unresolvable())?
            .next()
            .ok_or_else(unresolvable)
    }
}

fn not_blank(value: String, name: &'static str) -> Result<String, SettingsError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::Blank { name });
    }
    Ok(trimmed.to_owned())
}

fn parse_port(raw: &str) -> Result<u16, SettingsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::Blank { name: PORT_VAR });
    }
    trimmed.parse().map_err(|_| SettingsError::InvalidPort {
        value: raw.to_owned(),
    })
}

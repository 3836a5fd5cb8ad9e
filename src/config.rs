//! Relay configuration.
//!
//! The only configuration surface is the bind host and port. Values are
//! resolved in order: explicit CLI flag, then environment variable (a `.env`
//! file is honored via `dotenvy`), then the built-in default.

/// Default bind host when neither `--host` nor `RELAY_HOST` is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Default bind port when neither `--port` nor `RELAY_PORT` is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Resolved relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Host to bind the listener to. May be a hostname; resolution is left
    /// to the listener.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl RelayConfig {
    /// Resolves the configuration from optional CLI values, falling back to
    /// `RELAY_HOST` / `RELAY_PORT` and then the defaults.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    /// Invalid environment values are ignored in favor of the default.
    #[must_use]
    pub fn resolve(host: Option<String>, port: Option<u16>) -> Self {
        dotenvy::dotenv().ok();

        let host = host
            .or_else(|| std::env::var("RELAY_HOST").ok())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = port
            .or_else(|| std::env::var("RELAY_PORT").ok().and_then(|v| v.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }

    /// Returns the `host:port` string used for binding and logging.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

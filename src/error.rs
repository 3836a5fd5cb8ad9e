//! Relay error types.
//!
//! [`RelayError`] covers the only failures that are fatal to the process:
//! startup problems. Everything that happens on a live connection
//! (malformed payloads, out-of-range values, a peer vanishing mid-broadcast)
//! is recovered locally and silently, so no error ever travels back to a
//! client.

/// Startup failure taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The listener could not be bound (port in use, unresolvable host).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

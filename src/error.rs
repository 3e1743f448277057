//! Server startup errors.

use super::config::ConfigError;

/// Errors that abort the SSR host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Environment configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

//! Error types for the dashboard crate.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration values that cannot be served
    #[error("Invalid dashboard config: {0}")]
    InvalidConfig(String),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

//! Error taxonomy shared by ports and use cases.
//!
//! - [`TransportError`]: network / HTTP level failures. Never escapes the
//!   catalog client; it is folded into a [`CatalogResult`](crate::gif::CatalogResult).
//! - [`ValidationFailure`]: a file rejected before any network call.
//! - [`KeyValueStoreError`]: durable storage failures. Advisory only, the
//!   upload cache logs and swallows them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("{name} is not a GIF file (type: {mime})")]
    NotGif { name: String, mime: String },

    #[error("{name} is too large ({size} bytes, max {limit} bytes)")]
    TooLarge { name: String, size: u64, limit: u64 },
}

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("storage I/O failed: {0}")]
    Io(String),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

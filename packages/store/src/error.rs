//! Error taxonomy for store operations.
//!
//! Four classes, matching what can actually go wrong on either backend:
//! client-side validation, mutating an unknown id (mock path), a request
//! that never got a response, and a failure the server itself reported.
//! All of them collapse to one human-readable message at the view boundary
//! via `Display`; no structured codes cross the hook. Failures are locally
//! contained; nothing here is fatal and nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A client-side check failed before any storage or network work.
    #[error("{0}")]
    Validation(String),

    /// The targeted id is absent from the current record list.
    #[error("user {0} not found")]
    NotFound(String),

    /// No response received at all (DNS, refused connection, timeout).
    #[error("network error: server unreachable")]
    Unreachable,

    /// The server answered and reported failure; carries its message.
    #[error("{0}")]
    Api(String),
}

//! Remote Access Layer
//!
//! Bindings to the todos REST backend, split into the HTTP transport seam
//! and the todo operations built on top of it.

mod todos;
mod transport;

#[cfg(test)]
pub mod mock;

use thiserror::Error;

pub use todos::TodoApi;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// Result type for remote operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures that escape the remote layer.
///
/// Non-ok HTTP statuses are not errors: each operation maps them to its own
/// "nothing happened" value instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS)
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

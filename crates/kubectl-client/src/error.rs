//! kubectl client errors

use thiserror::Error;

/// Errors that can occur when invoking the external kubectl binary
#[derive(Debug, Error)]
pub enum KubectlError {
    /// The binary could not be spawned or its pipes failed
    #[error("Failed to run kubectl: {0}")]
    Io(#[from] std::io::Error),

    /// kubectl exited non-zero; the captured stderr is surfaced verbatim
    #[error("kubectl exited with status {status}: {stderr}")]
    CommandFailed {
        /// Process exit code (-1 when killed by a signal)
        status: i32,
        /// Captured standard error
        stderr: String,
    },

    /// The namespace or resource does not exist; read paths treat this as
    /// an empty result
    #[error("Not found: {0}")]
    NotFound(String),

    /// kubectl output could not be decoded
    #[error("Failed to decode kubectl output: {0}")]
    Json(#[from] serde_json::Error),
}

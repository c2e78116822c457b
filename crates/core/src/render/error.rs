//! Rendering and conversion error types.

use thiserror::Error;

/// Errors from HTML rendering or PDF conversion.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Converter process could not be driven.
    #[error("Converter I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Converter exited unsuccessfully.
    #[error("Converter exited with status {code:?}: {stderr}")]
    Converter {
        /// Process exit code, if any.
        code: Option<i32>,
        /// Captured standard error output.
        stderr: String,
    },

    /// Converter did not finish in time.
    #[error("Converter timed out after {0} seconds")]
    Timeout(u64),
}

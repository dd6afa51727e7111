//! Error types for texdown

use thiserror::Error;

/// Main error type for texdown operations
#[derive(Error, Debug)]
pub enum TexdownError {
    /// IO error while reading input or writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The event stream violated the producer contract
    #[error("Parse error: {0}")]
    Parse(String),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for texdown operations
pub type Result<T> = std::result::Result<T, TexdownError>;

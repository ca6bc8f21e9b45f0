//! Error types for tag-file export.

use thiserror::Error;

/// Errors that can occur while writing a tag file.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// IO error during write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field holds characters the target code page cannot represent.
    #[error("Symbol `{symbol}` cannot be encoded as {encoding}")]
    Unencodable {
        symbol: String,
        encoding: &'static str,
    },
}

impl InterchangeError {
    /// Create an encoding error for `symbol`.
    pub fn unencodable(symbol: impl Into<String>, encoding: &'static str) -> Self {
        Self::Unencodable {
            symbol: symbol.into(),
            encoding,
        }
    }
}

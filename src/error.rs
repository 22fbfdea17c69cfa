use std::io;

use thiserror::Error;

/// Errors produced while computing a digest.
#[derive(Debug, Error)]
pub enum Error {
    /// Opening or reading the input failed for a reason other than reaching
    /// its end. The underlying error is the source, not part of the message.
    #[error("I/O error")]
    Io(#[from] io::Error),

    /// A block was requested after the final block had been produced.
    ///
    /// Callers that check `has_more_data` first never see this.
    #[error("block loader is exhausted: no block follows the length block")]
    LoaderExhausted,
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, Error>;

//! Shared error type for invoice assembly.

use thiserror::Error;

/// Errors raised while assembling or saving an invoice document.
///
/// Formatting helpers never raise — they degrade to placeholders. An error
/// here means the document could not be built at all, and the caller must
/// not attempt a partial save.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// A field without which the document is meaningless.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The PDF backend rejected the document.
    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    /// Saving the finished document to disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

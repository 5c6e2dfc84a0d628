//! invoice-core: domain models, GST math, and formatting for transport invoices.
//!
//! Pure computation only — no I/O and no rendering. The `invoice-pdf` crate
//! consumes these types to lay out printable documents.

pub mod error;
pub mod format;
pub mod lines;
pub mod models;
pub mod tax;

pub use error::InvoiceError;

//! invoice-pdf: printable invoice documents for transport requests.
//!
//! Two synchronous entry points, both pure apart from the caller-invoked
//! [`RenderedInvoice::save`]:
//!
//! - [`generate_invoice`] — system path: one consolidated transportation
//!   charge per approved request, no forward tax line (reverse charge).
//! - [`generate_manual_invoice`] — manual path: per-sub-trip line items with
//!   a full CGST/SGST or IGST breakdown.

mod generator;
mod layout;
mod template;

pub use generator::{generate_invoice, generate_manual_invoice, RenderedInvoice};

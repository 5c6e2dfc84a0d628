//! Domain models for invoice generation.

mod manual;
mod request;
mod totals;

pub use manual::{ManualInvoiceInput, SubTrip, TaxConfig, DEFAULT_HSN_CODE};
pub use request::{RequestStatus, TransportRequest, TransporterDetail};
pub use totals::InvoiceTotals;

//! Derived invoice totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{SubTrip, TaxConfig};
use crate::tax::TaxBreakdown;

/// Monetary totals derived from the current input state.
///
/// Never stored and never cached: recompute from the inputs whenever any of
/// them changes. All fields keep full precision; rounding to whole rupees
/// happens only when a value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub additional_charges: Decimal,
    pub total_with_additional: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// Totals for the manual invoice path. Tax applies to the subtotal plus
    /// additional charges.
    pub fn compute(sub_trips: &[SubTrip], additional_charges: Decimal, tax: &TaxConfig) -> Self {
        let subtotal: Decimal = sub_trips.iter().map(SubTrip::amount).sum();
        let total_with_additional = subtotal + additional_charges;
        let breakdown = TaxBreakdown::compute(total_with_additional, tax);

        Self {
            subtotal,
            additional_charges,
            total_with_additional,
            cgst_amount: breakdown.cgst_amount,
            sgst_amount: breakdown.sgst_amount,
            igst_amount: breakdown.igst_amount,
            total_tax: breakdown.total_tax,
            grand_total: total_with_additional + breakdown.total_tax,
        }
    }

    /// Flat totals for the system-generated path. No forward tax is charged:
    /// GST is payable by the service recipient under reverse charge, stated
    /// in the printed terms rather than as a computed line.
    pub fn flat(amount: Decimal) -> Self {
        Self {
            subtotal: amount,
            additional_charges: Decimal::ZERO,
            total_with_additional: amount,
            cgst_amount: Decimal::ZERO,
            sgst_amount: Decimal::ZERO,
            igst_amount: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            grand_total: amount,
        }
    }
}

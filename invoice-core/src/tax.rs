//! GST breakdown over a taxable base.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxConfig;

/// CGST/SGST/IGST amounts computed for one taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub total_tax: Decimal,
}

impl TaxBreakdown {
    /// Compute the GST split for `taxable_base`.
    ///
    /// Interstate supplies (`use_igst`) charge IGST alone; intra-state
    /// supplies charge CGST and SGST. Negative bases and rates are treated
    /// as zero. No rounding happens here — display rounding is the
    /// renderer's job, and the grand total keeps full precision.
    pub fn compute(taxable_base: Decimal, tax: &TaxConfig) -> Self {
        let base = taxable_base.max(Decimal::ZERO);
        let pct = |rate: Decimal| base * rate.max(Decimal::ZERO) / Decimal::ONE_HUNDRED;

        let (cgst_amount, sgst_amount, igst_amount) = if tax.use_igst {
            (Decimal::ZERO, Decimal::ZERO, pct(tax.igst_rate))
        } else {
            (pct(tax.cgst_rate), pct(tax.sgst_rate), Decimal::ZERO)
        };

        Self {
            cgst_amount,
            sgst_amount,
            igst_amount,
            total_tax: cgst_amount + sgst_amount + igst_amount,
        }
    }
}

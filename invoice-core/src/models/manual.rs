//! User-constructed input for the manual invoice path.
//!
//! Field names serialize in camelCase: these shapes arrive from the console's
//! manual-invoice form as JSON.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// HSN code for road transportation of goods.
pub const DEFAULT_HSN_CODE: &str = "9965";

fn default_hsn_code() -> String {
    DEFAULT_HSN_CODE.to_string()
}

/// GST rate configuration. Rates are percentages (`9` means 9%).
///
/// Absent rates deserialize to zero; negative rates are clamped to zero by
/// the tax calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfig {
    #[serde(default)]
    pub use_igst: bool,
    #[serde(default)]
    pub cgst_rate: Decimal,
    #[serde(default)]
    pub sgst_rate: Decimal,
    #[serde(default)]
    pub igst_rate: Decimal,
}

/// One sub-trip on a manual invoice.
///
/// There is no stored line amount: [`SubTrip::amount`] is always
/// `rate * quantity`, so it cannot drift when either factor changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTrip {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_hsn_code")]
    pub hsn_code: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub rate: Decimal,

    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub container_no: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub seal_no: Option<String>,
    #[serde(default)]
    pub from_location: Option<String>,
    #[serde(default)]
    pub to_location: Option<String>,
}

impl SubTrip {
    /// Line amount, always derived from the current rate and quantity.
    pub fn amount(&self) -> Decimal {
        self.rate * self.quantity
    }
}

impl Default for SubTrip {
    fn default() -> Self {
        Self {
            description: String::new(),
            hsn_code: default_hsn_code(),
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
            vehicle_number: None,
            container_no: None,
            driver_name: None,
            seal_no: None,
            from_location: None,
            to_location: None,
        }
    }
}

/// Everything the manual invoice form collects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualInvoiceInput {
    /// Request the invoice refers to, if any. Used in the output filename;
    /// fully custom invoices leave it unset.
    #[serde(default)]
    pub request_id: Option<String>,

    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub customer_gstin: Option<String>,

    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub place_of_supply: Option<String>,

    #[serde(default)]
    pub sub_trips: Vec<SubTrip>,
    #[serde(default)]
    pub tax: TaxConfig,

    #[serde(default)]
    pub additional_charges: Decimal,
    #[serde(default)]
    pub additional_charges_description: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

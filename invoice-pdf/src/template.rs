//! Fixed boilerplate printed on every invoice.
//!
//! Presentation contract only: reproducible text, not specified bit-exactly.

pub(crate) const COMPANY_NAME: &str = "Sarthi Logistics Pvt. Ltd.";

pub(crate) const COMPANY_ADDRESS: [&str; 2] = [
    "Plot 14, Transport Nagar, Narol-Aslali Highway",
    "Ahmedabad, Gujarat 382405",
];

pub(crate) const COMPANY_GSTIN: &str = "GSTIN: 24AABCS9603R1ZX";

pub(crate) const COMPANY_CONTACT: &str = "accounts@sarthilogistics.in  |  +91 79 4890 2211";

pub(crate) const BANK_DETAILS: [(&str, &str); 4] = [
    ("Account Name", "Sarthi Logistics Pvt. Ltd."),
    ("Bank", "HDFC Bank, Narol Branch, Ahmedabad"),
    ("Account No.", "50200045817762"),
    ("IFSC", "HDFC0001357"),
];

/// Printed on system-generated invoices in place of a computed tax line.
pub(crate) const REVERSE_CHARGE_NOTE: &str = "GST on transportation charges is payable by the \
    recipient of the service under reverse charge, Notification 13/2017 - Central Tax (Rate).";

pub(crate) const TERMS_AND_CONDITIONS: [&str; 5] = [
    "Payment is due within 30 days of the invoice date.",
    "Detention, warai, and toll charges beyond the agreed transit plan are billed at actuals.",
    "Any discrepancy must be reported in writing within 7 days of receipt of this invoice.",
    "All disputes are subject to Ahmedabad jurisdiction.",
    "This is a computer-generated invoice and does not require a physical stamp.",
];

pub(crate) const SIGNATURE_LINE: &str = "Authorised Signatory";

//! Shared fixtures for invoice-pdf integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use invoice_core::models::{
    ManualInvoiceInput, RequestStatus, SubTrip, TaxConfig, TransportRequest, TransporterDetail,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

pub fn sample_request() -> TransportRequest {
    TransportRequest {
        id: "1042".to_string(),
        formatted_request_id: Some("TR-2026-1042".to_string()),
        consigner: "Apex Exports Pvt. Ltd.".to_string(),
        consignee: Some("Blue Harbour Imports".to_string()),
        customer_name: Some("Apex Exports Pvt. Ltd.".to_string()),
        customer_email: Some("ops@apexexports.in".to_string()),
        gstin: Some("24AAACA1234F1Z5".to_string()),
        pickup_location: Some("Ahmedabad".to_string()),
        stuffing_location: Some("Sanand ICD".to_string()),
        delivery_location: Some("Mundra Port".to_string()),
        commodity: Some("Ceramic Tiles".to_string()),
        cargo_type: Some("Export".to_string()),
        cargo_weight: Some("24 MT".to_string()),
        containers_20ft: Some(0),
        containers_40ft: Some(2),
        vehicle_type: Some("Trailer".to_string()),
        vehicle_size: Some("40ft".to_string()),
        no_of_vehicles: Some(2),
        requested_price: dec!(84000),
        service_type: vec!["Transportation".to_string()],
        service_prices: HashMap::new(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap(),
        expected_pickup_date: NaiveDate::from_ymd_opt(2026, 8, 3),
        expected_delivery_date: NaiveDate::from_ymd_opt(2026, 8, 5),
        status: RequestStatus::Approved,
    }
}

pub fn sample_transporter() -> TransporterDetail {
    TransporterDetail {
        vehicle_number: Some("GJ-01-AB-4521".to_string()),
        driver_name: Some("R. Chauhan".to_string()),
        container_no: Some("MSKU-481002-7".to_string()),
        container_size: Some("40ft".to_string()),
        container_type: Some("Dry".to_string()),
        seal_no: Some("SL-88412".to_string()),
        line: Some("Maersk".to_string()),
        total_charge: Some(dec!(42000)),
        additional_charges: None,
    }
}

pub fn sample_manual_input() -> ManualInvoiceInput {
    ManualInvoiceInput {
        request_id: Some("1042".to_string()),
        customer_name: "Acme Traders".to_string(),
        customer_email: Some("billing@acmetraders.in".to_string()),
        customer_address: Some("3rd Floor, Emerald House, Ring Road, Surat, Gujarat 395002".to_string()),
        customer_gstin: Some("24AADCA7777M1Z2".to_string()),
        invoice_number: "MI-2026-0017".to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        place_of_supply: Some("24-Gujarat".to_string()),
        sub_trips: vec![SubTrip {
            description: "Transportation - Mundra to Ludhiana".to_string(),
            quantity: dec!(2),
            rate: dec!(1000),
            vehicle_number: Some("GJ-01-AB-4521".to_string()),
            container_no: Some("MSKU-481002-7".to_string()),
            driver_name: Some("R. Chauhan".to_string()),
            seal_no: Some("SL-88412".to_string()),
            from_location: Some("Mundra".to_string()),
            to_location: Some("Ludhiana".to_string()),
            ..SubTrip::default()
        }],
        tax: TaxConfig {
            use_igst: false,
            cgst_rate: dec!(9),
            sgst_rate: dec!(9),
            igst_rate: dec!(0),
        },
        additional_charges: dec!(0),
        additional_charges_description: None,
        notes: None,
    }
}

/// Page count as reported by the PDF itself.
pub fn pdf_page_count(bytes: &[u8]) -> anyhow::Result<usize> {
    let document = lopdf::Document::load_mem(bytes)?;
    Ok(document.get_pages().len())
}

//! Invoice orchestration: assemble document data and drive the page layout.
//!
//! Both entry points run synchronously to completion. Any asynchronous work
//! (fetching transporter details, form state) happens in the caller before
//! the call; generation never awaits and never performs I/O. Errors
//! propagate — a partially built document is never returned.

use std::path::Path;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::instrument;

use invoice_core::format::{number_to_words, round_rupees, rupees};
use invoice_core::lines::{self, LineItem};
use invoice_core::models::{
    InvoiceTotals, ManualInvoiceInput, TransportRequest, TransporterDetail,
};
use invoice_core::InvoiceError;

use crate::layout::{wrap_text, Column, PageComposer, LINE_HEIGHT, MARGIN_LEFT};
use crate::template;

const LINE_ITEM_HEADERS: [&str; 6] = ["#", "Description", "HSN", "Qty", "Rate", "Amount"];
const LINE_ITEM_COLUMNS: [Column; 6] = [
    Column { x: 15.0, max_chars: 4 },
    Column { x: 24.0, max_chars: 44 },
    Column { x: 106.0, max_chars: 8 },
    Column { x: 122.0, max_chars: 7 },
    Column { x: 138.0, max_chars: 14 },
    Column { x: 166.0, max_chars: 16 },
];

const VEHICLE_HEADERS: [&str; 7] = [
    "Vehicle No", "Driver", "Container No", "Size", "Type", "Seal No", "Line",
];
const VEHICLE_COLUMNS: [Column; 7] = [
    Column { x: 15.0, max_chars: 14 },
    Column { x: 45.0, max_chars: 13 },
    Column { x: 73.0, max_chars: 14 },
    Column { x: 104.0, max_chars: 7 },
    Column { x: 121.0, max_chars: 9 },
    Column { x: 142.0, max_chars: 10 },
    Column { x: 165.0, max_chars: 14 },
];

const TRIP_HEADERS: [&str; 7] = [
    "#", "Vehicle No", "Container No", "Driver", "Seal No", "From", "To",
];
const TRIP_COLUMNS: [Column; 7] = [
    Column { x: 15.0, max_chars: 4 },
    Column { x: 24.0, max_chars: 13 },
    Column { x: 52.0, max_chars: 14 },
    Column { x: 83.0, max_chars: 12 },
    Column { x: 110.0, max_chars: 9 },
    Column { x: 131.0, max_chars: 13 },
    Column { x: 164.0, max_chars: 14 },
];

/// A fully laid-out invoice: finished PDF bytes plus the structural facts
/// callers and tests inspect.
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    bytes: Vec<u8>,
    page_count: usize,
    line_items: Vec<LineItem>,
    totals: InvoiceTotals,
    filename: String,
}

impl RenderedInvoice {
    pub fn pdf_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    /// `invoice-{requestId}-{YYYY-MM-DD}.pdf`, or the `manual-invoice-` form
    /// for the manual path. The date is the generation date.
    pub fn suggested_filename(&self) -> &str {
        &self.filename
    }

    /// Write the document to disk. The only I/O in this crate; triggering
    /// the save (and picking the destination) is the caller's concern.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InvoiceError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Render the system-generated invoice for a transport request.
///
/// Requires a request id and consigner; every other missing field degrades
/// to an "N/A" placeholder. `transporter_details` may be empty. No forward
/// tax line is printed — GST is payable by the recipient under reverse
/// charge, stated in the terms.
#[instrument(skip(request, transporter_details), fields(request_id = %request.id, transporters = transporter_details.len()))]
pub fn generate_invoice(
    request: &TransportRequest,
    transporter_details: &[TransporterDetail],
) -> Result<RenderedInvoice, InvoiceError> {
    if request.id.trim().is_empty() {
        return Err(InvoiceError::MissingField("request.id"));
    }
    if request.consigner.trim().is_empty() {
        return Err(InvoiceError::MissingField("request.consigner"));
    }

    let invoice_number = request
        .formatted_request_id
        .clone()
        .unwrap_or_else(|| format!("INV-{}", request.id));
    let line_items = lines::assemble_from_request(request);
    let totals = InvoiceTotals::flat(request.requested_price);

    let mut page = PageComposer::new(&format!("Invoice {invoice_number}"))?;

    draw_letterhead(&mut page, "INVOICE");
    draw_meta(
        &mut page,
        &[
            ("Invoice No.", invoice_number.clone()),
            ("Invoice Date", request.created_at.format("%d %b %Y").to_string()),
            ("Status", request.status.as_str().to_string()),
        ],
    );
    draw_request_parties(&mut page, request);
    draw_line_items(&mut page, &line_items);
    draw_totals_block(
        &mut page,
        &[],
        ("Total", money(totals.grand_total)),
    );
    draw_amount_in_words(&mut page, totals.grand_total);
    draw_vehicle_details(&mut page, transporter_details);
    draw_terms(&mut page, true);
    draw_bank_details(&mut page);
    draw_signature(&mut page);

    let (bytes, page_count) = page.finish()?;
    let filename = format!(
        "invoice-{}-{}.pdf",
        request.id,
        Utc::now().format("%Y-%m-%d")
    );

    Ok(RenderedInvoice {
        bytes,
        page_count,
        line_items,
        totals,
        filename,
    })
}

/// Render a manual invoice with the full CGST/SGST or IGST breakdown.
///
/// Empty sub-trip lists are valid: the table still prints its header and an
/// all-zero totals block, so the document is always renderable.
#[instrument(skip(input), fields(invoice_number = %input.invoice_number, sub_trips = input.sub_trips.len()))]
pub fn generate_manual_invoice(
    input: &ManualInvoiceInput,
) -> Result<RenderedInvoice, InvoiceError> {
    if input.invoice_number.trim().is_empty() {
        return Err(InvoiceError::MissingField("invoice_number"));
    }
    if input.customer_name.trim().is_empty() {
        return Err(InvoiceError::MissingField("customer_name"));
    }

    let line_items = lines::assemble_from_sub_trips(
        &input.sub_trips,
        input.additional_charges,
        input.additional_charges_description.as_deref(),
    );
    let totals = InvoiceTotals::compute(&input.sub_trips, input.additional_charges, &input.tax);

    let mut page = PageComposer::new(&format!("Tax Invoice {}", input.invoice_number))?;

    draw_letterhead(&mut page, "TAX INVOICE");
    draw_meta(
        &mut page,
        &[
            ("Invoice No.", input.invoice_number.clone()),
            ("Invoice Date", input.invoice_date.format("%d %b %Y").to_string()),
            (
                "Place of Supply",
                input.place_of_supply.clone().unwrap_or_else(na),
            ),
        ],
    );
    draw_customer_block(&mut page, input);
    draw_line_items(&mut page, &line_items);

    let mut tax_rows = vec![("Subtotal".to_string(), money(totals.subtotal))];
    if totals.additional_charges > Decimal::ZERO {
        tax_rows.push((
            "Additional Charges".to_string(),
            money(totals.additional_charges),
        ));
    }
    if input.tax.use_igst {
        tax_rows.push((
            format!("IGST ({}%)", input.tax.igst_rate.normalize()),
            money(totals.igst_amount),
        ));
    } else {
        tax_rows.push((
            format!("CGST ({}%)", input.tax.cgst_rate.normalize()),
            money(totals.cgst_amount),
        ));
        tax_rows.push((
            format!("SGST ({}%)", input.tax.sgst_rate.normalize()),
            money(totals.sgst_amount),
        ));
    }
    draw_totals_block(&mut page, &tax_rows, ("Grand Total", money(totals.grand_total)));
    draw_amount_in_words(&mut page, totals.grand_total);
    draw_trip_details(&mut page, input);
    if let Some(notes) = input.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        draw_notes(&mut page, notes);
    }
    draw_terms(&mut page, false);
    draw_bank_details(&mut page);
    draw_signature(&mut page);

    let (bytes, page_count) = page.finish()?;
    let filename = format!(
        "manual-invoice-{}-{}.pdf",
        input.request_id.as_deref().unwrap_or("custom"),
        Utc::now().format("%Y-%m-%d")
    );

    Ok(RenderedInvoice {
        bytes,
        page_count,
        line_items,
        totals,
        filename,
    })
}

// Builtin Helvetica carries no rupee glyph, so printed amounts use "Rs.".
// The public `format_currency` API keeps the rupee sign.
fn money(value: Decimal) -> String {
    format!("Rs. {}", rupees(value))
}

fn na() -> String {
    "N/A".to_string()
}

fn opt(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(na)
}

fn draw_letterhead(page: &mut PageComposer, title: &str) {
    page.text_bold(template::COMPANY_NAME, 15.0, MARGIN_LEFT);
    page.text_bold(title, 17.0, 140.0);
    page.advance(6.5);
    for line in template::COMPANY_ADDRESS {
        page.text(line, 9.0, MARGIN_LEFT);
        page.advance(4.5);
    }
    page.text(template::COMPANY_GSTIN, 9.0, MARGIN_LEFT);
    page.advance(4.5);
    page.text(template::COMPANY_CONTACT, 9.0, MARGIN_LEFT);
    page.advance(3.0);
    page.rule();
    page.advance(7.0);
}

fn draw_meta(page: &mut PageComposer, rows: &[(&str, String)]) {
    page.ensure_space(rows.len() as f32 * LINE_HEIGHT + 4.0);
    for (label, value) in rows {
        page.text_bold(&format!("{label}:"), 9.0, 130.0);
        page.text(value, 9.0, 158.0);
        page.advance(LINE_HEIGHT);
    }
    page.advance(3.0);
}

fn draw_request_parties(page: &mut PageComposer, request: &TransportRequest) {
    page.ensure_space(LINE_HEIGHT * 6.0 + 6.0);
    page.text_bold("Billed To", 10.0, MARGIN_LEFT);
    page.text_bold("Shipment", 10.0, 110.0);
    page.advance(6.0);

    let containers = format!(
        "Containers: {} x 20ft, {} x 40ft",
        request.containers_20ft.unwrap_or(0),
        request.containers_40ft.unwrap_or(0)
    );
    let left = [
        request.consigner.clone(),
        format!("Consignee: {}", opt(&request.consignee)),
        format!("GSTIN: {}", opt(&request.gstin)),
        format!("Email: {}", opt(&request.customer_email)),
        format!("Commodity: {}", opt(&request.commodity)),
    ];
    let right = [
        format!("Pickup: {}", opt(&request.pickup_location)),
        format!("Stuffing: {}", opt(&request.stuffing_location)),
        format!("Delivery: {}", opt(&request.delivery_location)),
        format!("Cargo Weight: {}", opt(&request.cargo_weight)),
        containers,
    ];
    for (left_line, right_line) in left.iter().zip(right.iter()) {
        page.ensure_space(LINE_HEIGHT);
        page.text(left_line, 9.0, MARGIN_LEFT);
        page.text(right_line, 9.0, 110.0);
        page.advance(LINE_HEIGHT);
    }
    page.advance(4.0);
}

fn draw_customer_block(page: &mut PageComposer, input: &ManualInvoiceInput) {
    page.ensure_space(LINE_HEIGHT * 5.0 + 6.0);
    page.text_bold("Billed To", 10.0, MARGIN_LEFT);
    page.advance(6.0);
    page.text(&input.customer_name, 9.0, MARGIN_LEFT);
    page.advance(LINE_HEIGHT);

    if let Some(address) = input.customer_address.as_deref() {
        let lines = wrap_text(address, 60);
        page.paragraph(&lines, 9.0, MARGIN_LEFT);
    }
    page.ensure_space(LINE_HEIGHT * 2.0);
    page.text(&format!("GSTIN: {}", opt(&input.customer_gstin)), 9.0, MARGIN_LEFT);
    page.advance(LINE_HEIGHT);
    page.text(&format!("Email: {}", opt(&input.customer_email)), 9.0, MARGIN_LEFT);
    page.advance(LINE_HEIGHT + 4.0);
}

fn draw_line_items(page: &mut PageComposer, items: &[LineItem]) {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.serial.to_string(),
                item.description.clone(),
                item.hsn_code.clone(),
                item.quantity.normalize().to_string(),
                money(item.rate),
                money(item.amount),
            ]
        })
        .collect();
    page.table(&LINE_ITEM_HEADERS, &LINE_ITEM_COLUMNS, &rows);
}

fn draw_totals_block(page: &mut PageComposer, rows: &[(String, String)], grand: (&str, String)) {
    page.ensure_space((rows.len() as f32 + 2.0) * LINE_HEIGHT + 6.0);
    page.rule();
    page.advance(LINE_HEIGHT);
    for (label, value) in rows {
        page.text(label, 9.0, 130.0);
        page.text(value, 9.0, 166.0);
        page.advance(LINE_HEIGHT);
    }
    page.text_bold(grand.0, 10.0, 130.0);
    page.text_bold(&grand.1, 10.0, 166.0);
    page.advance(LINE_HEIGHT + 2.0);
}

fn draw_amount_in_words(page: &mut PageComposer, amount: Decimal) {
    let words = format!(
        "Amount in Words: {} Rupees Only",
        number_to_words(round_rupees(amount))
    );
    let lines = wrap_text(&words, 100);
    page.paragraph(&lines, 9.0, MARGIN_LEFT);
    page.advance(4.0);
}

fn draw_vehicle_details(page: &mut PageComposer, details: &[TransporterDetail]) {
    page.ensure_space(LINE_HEIGHT + 4.0);
    page.text_bold("Vehicle & Container Details", 10.0, MARGIN_LEFT);
    page.advance(6.0);

    let rows: Vec<Vec<String>> = if details.is_empty() {
        vec![vec![na(); VEHICLE_COLUMNS.len()]]
    } else {
        details
            .iter()
            .map(|detail| {
                vec![
                    opt(&detail.vehicle_number),
                    opt(&detail.driver_name),
                    opt(&detail.container_no),
                    opt(&detail.container_size),
                    opt(&detail.container_type),
                    opt(&detail.seal_no),
                    opt(&detail.line),
                ]
            })
            .collect()
    };
    page.table(&VEHICLE_HEADERS, &VEHICLE_COLUMNS, &rows);
    page.advance(4.0);
}

fn draw_trip_details(page: &mut PageComposer, input: &ManualInvoiceInput) {
    page.ensure_space(LINE_HEIGHT + 4.0);
    page.text_bold("Trip Details", 10.0, MARGIN_LEFT);
    page.advance(6.0);

    let rows: Vec<Vec<String>> = if input.sub_trips.is_empty() {
        vec![vec![na(); TRIP_COLUMNS.len()]]
    } else {
        input
            .sub_trips
            .iter()
            .enumerate()
            .map(|(index, trip)| {
                vec![
                    (index + 1).to_string(),
                    opt(&trip.vehicle_number),
                    opt(&trip.container_no),
                    opt(&trip.driver_name),
                    opt(&trip.seal_no),
                    opt(&trip.from_location),
                    opt(&trip.to_location),
                ]
            })
            .collect()
    };
    page.table(&TRIP_HEADERS, &TRIP_COLUMNS, &rows);
    page.advance(4.0);
}

fn draw_notes(page: &mut PageComposer, notes: &str) {
    page.ensure_space(LINE_HEIGHT * 2.0 + 4.0);
    page.text_bold("Notes", 10.0, MARGIN_LEFT);
    page.advance(6.0);
    let lines = wrap_text(notes, 100);
    page.paragraph(&lines, 9.0, MARGIN_LEFT);
    page.advance(4.0);
}

fn draw_terms(page: &mut PageComposer, include_reverse_charge: bool) {
    page.ensure_space(LINE_HEIGHT * 2.0 + 4.0);
    page.text_bold("Terms & Conditions", 10.0, MARGIN_LEFT);
    page.advance(6.0);

    let mut terms: Vec<&str> = Vec::new();
    if include_reverse_charge {
        terms.push(template::REVERSE_CHARGE_NOTE);
    }
    terms.extend(template::TERMS_AND_CONDITIONS);

    for (index, term) in terms.iter().enumerate() {
        let lines = wrap_text(&format!("{}. {}", index + 1, term), 105);
        page.paragraph(&lines, 8.0, MARGIN_LEFT);
    }
    page.advance(4.0);
}

fn draw_bank_details(page: &mut PageComposer) {
    page.ensure_space((template::BANK_DETAILS.len() as f32 + 2.0) * LINE_HEIGHT);
    page.text_bold("Bank Details", 10.0, MARGIN_LEFT);
    page.advance(6.0);
    for (label, value) in template::BANK_DETAILS {
        page.text(&format!("{label}: {value}"), 9.0, MARGIN_LEFT);
        page.advance(LINE_HEIGHT);
    }
    page.advance(4.0);
}

fn draw_signature(page: &mut PageComposer) {
    page.ensure_space(LINE_HEIGHT * 5.0);
    page.text_bold(&format!("For {}", template::COMPANY_NAME), 10.0, 135.0);
    page.advance(16.0);
    page.text(template::SIGNATURE_LINE, 9.0, 135.0);
    page.advance(LINE_HEIGHT);
}

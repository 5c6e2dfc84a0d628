//! Line-item assembly for both invoice paths.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{SubTrip, TransportRequest, DEFAULT_HSN_CODE};

/// Description used for the synthetic additional-charges row when the caller
/// does not supply one.
pub const ADDITIONAL_CHARGES_DESCRIPTION: &str = "Additional Charges";

/// One printable row of the line-item table.
///
/// The trailing totals row carries no serial and is the renderer's concern,
/// so it is not represented here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub serial: u32,
    pub description: String,
    pub hsn_code: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Single consolidated line for the system-generated path.
///
/// The displayed unit rate is the requested price split evenly across the
/// vehicles (default one vehicle); the line amount stays the full requested
/// price.
pub fn assemble_from_request(request: &TransportRequest) -> Vec<LineItem> {
    let vehicles = request.no_of_vehicles.unwrap_or(1).max(1);
    let quantity = Decimal::from(vehicles);

    let from = request.pickup_location.as_deref().unwrap_or("N/A");
    let to = request.delivery_location.as_deref().unwrap_or("N/A");

    vec![LineItem {
        serial: 1,
        description: format!("Transportation Charges ({from} to {to})"),
        hsn_code: DEFAULT_HSN_CODE.to_string(),
        quantity,
        rate: request.requested_price / quantity,
        amount: request.requested_price,
    }]
}

/// Ordered line items for the manual path: one per sub-trip, 1-based serials,
/// plus a synthetic trailing row when `additional_charges` is positive.
///
/// An empty sub-trip list yields an empty vec — the renderer still emits the
/// table header and an all-zero totals row, so the document stays renderable.
pub fn assemble_from_sub_trips(
    sub_trips: &[SubTrip],
    additional_charges: Decimal,
    additional_charges_description: Option<&str>,
) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = sub_trips
        .iter()
        .enumerate()
        .map(|(index, trip)| LineItem {
            serial: index as u32 + 1,
            description: trip.description.clone(),
            hsn_code: if trip.hsn_code.is_empty() {
                DEFAULT_HSN_CODE.to_string()
            } else {
                trip.hsn_code.clone()
            },
            quantity: trip.quantity,
            rate: trip.rate,
            amount: trip.amount(),
        })
        .collect();

    if additional_charges > Decimal::ZERO {
        items.push(LineItem {
            serial: items.len() as u32 + 1,
            description: additional_charges_description
                .unwrap_or(ADDITIONAL_CHARGES_DESCRIPTION)
                .to_string(),
            hsn_code: DEFAULT_HSN_CODE.to_string(),
            quantity: Decimal::ONE,
            rate: additional_charges,
            amount: additional_charges,
        });
    }

    items
}

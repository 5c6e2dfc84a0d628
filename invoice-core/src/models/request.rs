//! Transport request shapes as returned by the fleet backend.
//!
//! These are consumed read-only: the backend is the system of record, and
//! invoice generation never writes them back.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(rename = "in progress")]
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::InProgress => "in progress",
            RequestStatus::Completed => "completed",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            "in progress" => RequestStatus::InProgress,
            "completed" => RequestStatus::Completed,
            _ => RequestStatus::Pending,
        }
    }
}

/// A transport request.
///
/// `requested_price` is the base amount before tax. Most descriptive fields
/// are nullable on the backend; missing values render as placeholders rather
/// than failing generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportRequest {
    pub id: String,
    pub formatted_request_id: Option<String>,

    pub consigner: String,
    pub consignee: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub gstin: Option<String>,

    pub pickup_location: Option<String>,
    pub stuffing_location: Option<String>,
    pub delivery_location: Option<String>,

    pub commodity: Option<String>,
    pub cargo_type: Option<String>,
    pub cargo_weight: Option<String>,
    pub containers_20ft: Option<u32>,
    pub containers_40ft: Option<u32>,

    pub vehicle_type: Option<String>,
    pub vehicle_size: Option<String>,
    pub no_of_vehicles: Option<u32>,

    pub requested_price: Decimal,
    #[serde(default)]
    pub service_type: Vec<String>,
    #[serde(default)]
    pub service_prices: HashMap<String, Decimal>,

    pub created_at: DateTime<Utc>,
    pub expected_pickup_date: Option<NaiveDate>,
    pub expected_delivery_date: Option<NaiveDate>,

    pub status: RequestStatus,
}

/// Vehicle/container assignment recorded against a request.
///
/// A request may carry zero of these; generation must still succeed and
/// render "N/A" placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransporterDetail {
    pub vehicle_number: Option<String>,
    pub driver_name: Option<String>,
    pub container_no: Option<String>,
    pub container_size: Option<String>,
    pub container_type: Option<String>,
    pub seal_no: Option<String>,
    pub line: Option<String>,
    pub total_charge: Option<Decimal>,
    pub additional_charges: Option<Decimal>,
}

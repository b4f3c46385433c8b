//! Wire models for the Sabeh REST contract
//!
//! Field names on the wire are camelCase. The user profile is opaque to
//! the session core beyond being serializable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub account_manager: String,
    #[serde(default)]
    pub account_level: String,
    #[serde(default)]
    pub area_code: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub shipping_address: String,
}

/// Payload returned by login and signup.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Full tracking record for a single shipment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub status: String,
    pub price_per_kg: f64,
    pub total_due: f64,
    pub departed_from: String,
    pub destination: String,
    pub shipping_mark: String,
    pub total_ctn: u32,
    pub total_weight: String,
    pub total_cbm: String,
    pub goods_description: String,
    pub shipment_type: String,
    pub eta: String,
    pub etd: String,
    pub inventory_no: String,
    pub packed_orders: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// One line of the recent-shipments list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSummary {
    pub id: String,
    pub status: String,
    pub shipping_mark: String,
    pub total: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightRequest {
    pub transportation_type: String,
    pub weight: f64,
    pub cbm: f64,
}

/// Server-computed freight quote. The arithmetic lives on the backend;
/// the estimate arrives pre-formatted.
#[derive(Debug, Clone, Deserialize)]
pub struct FreightQuote {
    pub estimate: String,
    pub currency: String,
    pub breakdown: FreightBreakdown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightBreakdown {
    pub weight: f64,
    pub volume: f64,
    pub base_rate: f64,
    pub volume_rate: f64,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw order input as it arrives from a form or the command line: every
/// field optional, every field text. Converted into an [`OrderRequest`]
/// only by the validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub pickup_lat: Option<String>,
    pub pickup_lng: Option<String>,
    pub drop_lat: Option<String>,
    pub drop_lng: Option<String>,
    pub pickup_address: Option<String>,
    pub drop_address: Option<String>,
    pub material_type: Option<String>,
    pub weight_kg: Option<String>,
    pub material_description: Option<String>,
}

/// Validated order payload as sent to the order-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub drop_lat: f64,
    pub drop_lng: f64,
    pub pickup_address: String,
    pub drop_address: String,
    pub material_type: String,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_description: Option<String>,
}

/// Server confirmation for a created order. Only the identifier and fare are
/// contracted; anything else the server returns is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: i64,
    pub fare_total: f64,
    pub distance_km: Option<f64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// User record returned by the login endpoint and held in the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// One row of the customer's order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub status: String,
    pub fare_total: f64,
    pub driver_id: Option<i64>,
    pub distance_km: f64,
    pub created_at: NaiveDateTime,
}

/// Live tracking state of an order. `driver` is absent until one is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingInfo {
    pub status: String,
    pub driver: Option<DriverPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverPosition {
    pub id: i64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

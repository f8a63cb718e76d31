use crate::domain::model::{OrderDraft, OrderRequest};
use crate::utils::error::{ClientError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Required order fields, in the order they are checked and reported.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "pickup_lat",
    "pickup_lng",
    "drop_lat",
    "drop_lng",
    "pickup_address",
    "drop_address",
    "material_type",
    "weight_kg",
];

/// Converts a raw draft into a validated order.
///
/// The missing-field pass runs over all required fields first and reports
/// every violation jointly; numeric parsing and range checks run after it,
/// field by field. Text fields pass through unchanged.
pub fn validate_order(draft: &OrderDraft) -> Result<OrderRequest> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| is_missing(field_value(draft, field)))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ClientError::MissingFields(missing));
    }

    let pickup_lat = parse_latitude("pickup_lat", draft.pickup_lat.as_deref())?;
    let pickup_lng = parse_longitude("pickup_lng", draft.pickup_lng.as_deref())?;
    let drop_lat = parse_latitude("drop_lat", draft.drop_lat.as_deref())?;
    let drop_lng = parse_longitude("drop_lng", draft.drop_lng.as_deref())?;
    let weight_kg = parse_weight("weight_kg", draft.weight_kg.as_deref())?;

    Ok(OrderRequest {
        pickup_lat,
        pickup_lng,
        drop_lat,
        drop_lng,
        pickup_address: draft.pickup_address.clone().unwrap_or_default(),
        drop_address: draft.drop_address.clone().unwrap_or_default(),
        material_type: draft.material_type.clone().unwrap_or_default(),
        weight_kg,
        material_description: draft.material_description.clone(),
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfig {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfig {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfig {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

fn field_value<'a>(draft: &'a OrderDraft, field: &str) -> Option<&'a str> {
    match field {
        "pickup_lat" => draft.pickup_lat.as_deref(),
        "pickup_lng" => draft.pickup_lng.as_deref(),
        "drop_lat" => draft.drop_lat.as_deref(),
        "drop_lng" => draft.drop_lng.as_deref(),
        "pickup_address" => draft.pickup_address.as_deref(),
        "drop_address" => draft.drop_address.as_deref(),
        "material_type" => draft.material_type.as_deref(),
        "weight_kg" => draft.weight_kg.as_deref(),
        _ => None,
    }
}

fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

fn parse_finite(field: &str, value: Option<&str>) -> Result<f64> {
    let parsed = value
        .unwrap_or("")
        .trim()
        .parse::<f64>()
        .map_err(|_| ClientError::InvalidNumber {
            field: field.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(ClientError::InvalidNumber {
            field: field.to_string(),
        });
    }
    Ok(parsed)
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value < min || value > max {
        return Err(ClientError::OutOfRange {
            field: field.to_string(),
            bound: format!("between {} and {}", min, max),
        });
    }
    Ok(value)
}

fn parse_latitude(field: &str, value: Option<&str>) -> Result<f64> {
    check_range(field, parse_finite(field, value)?, -90.0, 90.0)
}

fn parse_longitude(field: &str, value: Option<&str>) -> Result<f64> {
    check_range(field, parse_finite(field, value)?, -180.0, 180.0)
}

fn parse_weight(field: &str, value: Option<&str>) -> Result<f64> {
    let weight = parse_finite(field, value)?;
    if weight <= 0.0 {
        return Err(ClientError::OutOfRange {
            field: field.to_string(),
            bound: "greater than 0".to_string(),
        });
    }
    Ok(weight)
}

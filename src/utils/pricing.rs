//! Client-side fare estimation mirroring the platform's pricing rules.

pub const BASE_FARE: f64 = 30.0;
pub const PER_KM: f64 = 10.0;
pub const PER_KG: f64 = 5.0;
pub const COMMISSION_RATE: f64 = 0.10;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareBreakdown {
    pub total: f64,
    pub driver_share: f64,
    pub commission: f64,
}

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Fare for a trip: base fare plus distance and weight components, with the
/// platform commission split out. All amounts rounded to 2 decimals.
pub fn compute_fare(distance_km: f64, weight_kg: f64) -> FareBreakdown {
    let total = BASE_FARE + distance_km * PER_KM + weight_kg * PER_KG;
    let commission = round2(total * COMMISSION_RATE);
    let driver_share = round2(total - commission);
    FareBreakdown {
        total: round2(total),
        driver_share,
        commission,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use types::ids::SpotId;

#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of `POST /api/bidding/bid`
///
/// Both fields are optional at the wire level; absence is reported by the ledger.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceBidRequest {
    #[serde(default, deserialize_with = "integral_spot_id")]
    pub spot_id: Option<SpotId>,
    #[serde(default)]
    pub bid_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceBidResponse {
    pub success: bool,
    #[serde(serialize_with = "types::numeric::serialize")]
    pub new_bid: Decimal,
}

/// Accept `1` and `1.0` alike; a fractional or negative id is malformed
fn integral_spot_id<'de, D>(deserializer: D) -> Result<Option<SpotId>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(id) = number.as_u64() {
        return Ok(Some(SpotId::new(id)));
    }
    match number.as_f64() {
        Some(id) if id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 => {
            Ok(Some(SpotId::new(id as u64)))
        }
        _ => Err(D::Error::custom(format!(
            "spot_id must be a non-negative integer, got {number}"
        ))),
    }
}

/// Query string of `GET /api/locations/search`
///
/// Kept as raw strings so malformed numbers degrade to "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSearchParams {
    pub city: Option<String>,
    pub area_min: Option<String>,
    pub rent_max: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

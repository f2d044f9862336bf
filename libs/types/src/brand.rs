//! Brand types
//!
//! A `Brand` is immutable catalog data. A `BrandMatch` is the per-request copy
//! carrying the score and reasons computed against one project; it is never
//! written back to the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Attributes;

/// A brand looking for retail space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub target_audience: String,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub rent_budget: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub area_needed: Decimal,
    #[serde(flatten)]
    pub extra: Attributes,
}

/// A brand scored against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMatch {
    #[serde(flatten)]
    pub brand: Brand,
    pub match_score: u32,
    pub reason: String,
}

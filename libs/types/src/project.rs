//! Commercial project types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;
use crate::Attributes;

/// A commercial project with space to let
///
/// Invariant: `rent_min <= rent_max` (checked by the catalog loader).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub target_audience: String,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub rent_min: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub rent_max: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub available_area: Decimal,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Project {
    /// Check whether a rent budget falls inside the project's rent band (inclusive).
    pub fn accepts_rent(&self, budget: Decimal) -> bool {
        self.rent_min <= budget && budget <= self.rent_max
    }

    /// Check whether the project can host a brand needing `area`.
    pub fn fits_area(&self, area: Decimal) -> bool {
        area <= self.available_area
    }
}

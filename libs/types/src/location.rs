//! Available location types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Attributes;

/// A location available to let, searchable by the location finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub area: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub rent: Decimal,
    /// Business type tags the location is suitable for (e.g. "restaurant", "retail")
    pub suitable_for: Vec<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl Location {
    pub fn is_suitable_for(&self, kind: &str) -> bool {
        self.suitable_for.iter().any(|tag| tag == kind)
    }
}

//! Location search
//!
//! Every criterion is optional and they combine with AND. Numeric criteria
//! come from query strings and are parsed permissively: anything that is not
//! an integer is dropped rather than rejected, and zero means "no limit".

use rust_decimal::Decimal;
use types::location::Location;

/// Criteria for a location search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: Option<String>,
    pub area_min: Option<i64>,
    pub rent_max: Option<i64>,
    pub kind: Option<String>,
}

impl LocationQuery {
    /// Build a query from raw query-string values
    pub fn from_params(
        city: Option<&str>,
        area_min: Option<&str>,
        rent_max: Option<&str>,
        kind: Option<&str>,
    ) -> Self {
        Self {
            city: non_empty(city),
            area_min: parse_limit(area_min),
            rent_max: parse_limit(rent_max),
            kind: non_empty(kind),
        }
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, location: &Location) -> bool {
        if let Some(city) = &self.city {
            if location.city.to_lowercase() != city.to_lowercase() {
                return false;
            }
        }
        if let Some(area_min) = self.area_min {
            if location.area < Decimal::from(area_min) {
                return false;
            }
        }
        if let Some(rent_max) = self.rent_max {
            if location.rent > Decimal::from(rent_max) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if !location.is_suitable_for(kind) {
                return false;
            }
        }
        true
    }
}

/// Locations satisfying every criterion of `query`, in catalog order
pub fn search(locations: &[Location], query: &LocationQuery) -> Vec<Location> {
    if query.is_empty() {
        return locations.to_vec();
    }
    locations
        .iter()
        .filter(|location| query.matches(location))
        .cloned()
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_limit(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v != 0)
}

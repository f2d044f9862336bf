//! Load-time consistency checks
//!
//! Serde guarantees the shape of each document; these checks cover the
//! invariants that span fields or records.

use std::collections::HashSet;

use rust_decimal::Decimal;
use types::project::Project;
use types::spot::BiddingSpot;

use crate::loader::{LoadError, PROJECTS_FILE, SPOTS_FILE};

pub fn projects(projects: &[Project]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id) {
            return Err(invalid(PROJECTS_FILE, format!("duplicate project id {}", project.id)));
        }
        if project.rent_min > project.rent_max {
            return Err(invalid(
                PROJECTS_FILE,
                format!(
                    "project {} has rent_min {} above rent_max {}",
                    project.id, project.rent_min, project.rent_max
                ),
            ));
        }
    }
    Ok(())
}

pub fn spots(spots: &[BiddingSpot]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for spot in spots {
        if !seen.insert(spot.id) {
            return Err(invalid(SPOTS_FILE, format!("duplicate spot id {}", spot.id)));
        }
        if spot.starting_bid < Decimal::ZERO {
            return Err(invalid(
                SPOTS_FILE,
                format!("spot {} has negative starting_bid {}", spot.id, spot.starting_bid),
            ));
        }
        if spot.bid_increment <= Decimal::ZERO {
            return Err(invalid(
                SPOTS_FILE,
                format!("spot {} has non-positive bid_increment {}", spot.id, spot.bid_increment),
            ));
        }
        if spot.current_bid < spot.starting_bid {
            return Err(invalid(
                SPOTS_FILE,
                format!(
                    "spot {} has current_bid {} below starting_bid {}",
                    spot.id, spot.current_bid, spot.starting_bid
                ),
            ));
        }
    }
    Ok(())
}

fn invalid(file: &'static str, reason: String) -> LoadError {
    LoadError::Invalid { file, reason }
}

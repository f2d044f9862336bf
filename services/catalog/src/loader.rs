use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};
use types::brand::Brand;
use types::heatmap::HeatmapCell;
use types::location::Location;
use types::project::Project;
use types::spot::BiddingSpot;

use crate::validate;

pub const PROJECTS_FILE: &str = "projects.json";
pub const BRANDS_FILE: &str = "brands.json";
pub const SPOTS_FILE: &str = "biddable_spots.json";
pub const LOCATIONS_FILE: &str = "available_locations.json";
pub const HEATMAP_FILE: &str = "heatmap_data.json";

/// Errors raised while loading the catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("inconsistent {file}: {reason}")]
    Invalid { file: &'static str, reason: String },
}

/// Read-only catalog data
///
/// Spots are not part of the catalog: they are returned separately by
/// [`Catalog::load`] because the bidding ledger owns them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub brands: Vec<Brand>,
    pub locations: Vec<Location>,
    pub heatmap: Vec<HeatmapCell>,
}

impl Catalog {
    /// Load and validate every document under `dir`
    pub fn load(dir: impl AsRef<Path>) -> Result<(Self, Vec<BiddingSpot>), LoadError> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "loading catalog");

        let projects: Vec<Project> = read_document(dir, PROJECTS_FILE)?;
        let brands: Vec<Brand> = read_document(dir, BRANDS_FILE)?;
        let spots: Vec<BiddingSpot> = read_document(dir, SPOTS_FILE)?;
        let locations: Vec<Location> = read_document(dir, LOCATIONS_FILE)?;
        let heatmap: Vec<HeatmapCell> = read_document(dir, HEATMAP_FILE)?;

        validate::projects(&projects)?;
        validate::spots(&spots)?;

        info!(
            projects = projects.len(),
            brands = brands.len(),
            spots = spots.len(),
            locations = locations.len(),
            heatmap_cells = heatmap.len(),
            "catalog loaded"
        );

        Ok((
            Self {
                projects,
                brands,
                locations,
                heatmap,
            },
            spots,
        ))
    }

    /// Build a catalog from in-memory collections
    pub fn from_parts(
        projects: Vec<Project>,
        brands: Vec<Brand>,
        locations: Vec<Location>,
        heatmap: Vec<HeatmapCell>,
    ) -> Self {
        Self {
            projects,
            brands,
            locations,
            heatmap,
        }
    }
}

fn read_document<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, LoadError> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    let items: Vec<T> =
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse { path, source })?;
    debug!(file, count = items.len(), "document read");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use tempfile::TempDir;
    use types::ids::{ProjectId, SpotId};

    fn write(dir: &Path, file: &str, value: serde_json::Value) {
        fs::write(dir.join(file), value.to_string()).unwrap();
    }

    fn fixture_dir() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        write(
            dir,
            PROJECTS_FILE,
            json!([{
                "id": 7,
                "name": "Riverside Plaza",
                "target_audience": "young",
                "rent_min": 100,
                "rent_max": 500,
                "available_area": 200
            }]),
        );
        write(
            dir,
            BRANDS_FILE,
            json!([{
                "id": 1,
                "name": "Tea House",
                "type": "beverage",
                "target_audience": "young",
                "rent_budget": 300,
                "area_needed": 150.5
            }]),
        );
        write(
            dir,
            SPOTS_FILE,
            json!([{
                "id": 1,
                "name": "Atrium LED",
                "starting_bid": 1000,
                "current_bid": 1200,
                "bid_increment": 100
            }]),
        );
        write(
            dir,
            LOCATIONS_FILE,
            json!([{
                "id": 1,
                "city": "Shanghai",
                "area": 120,
                "rent": 300,
                "suitable_for": ["retail", "restaurant"]
            }]),
        );
        write(dir, HEATMAP_FILE, json!([[31.23, 121.47, 0.8]]));
        tmp
    }

    #[test]
    fn test_load_all_documents() {
        let tmp = fixture_dir();
        let (catalog, spots) = Catalog::load(tmp.path()).unwrap();

        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.projects[0].id, ProjectId::new(7));
        assert_eq!(catalog.brands[0].area_needed, Decimal::new(1505, 1));
        assert_eq!(catalog.brands[0].extra["type"], json!("beverage"));
        assert_eq!(spots[0].id, SpotId::new(1));
        assert_eq!(spots[0].current_bid, Decimal::from(1200));
        assert_eq!(catalog.locations[0].suitable_for, vec!["retail", "restaurant"]);
        assert_eq!(catalog.heatmap[0].0, json!([31.23, 121.47, 0.8]));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let tmp = fixture_dir();
        fs::remove_file(tmp.path().join(HEATMAP_FILE)).unwrap();

        let err = Catalog::load(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains(HEATMAP_FILE));
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let tmp = fixture_dir();
        fs::write(tmp.path().join(BRANDS_FILE), "[{\"target_audience\": ").unwrap();

        let err = Catalog::load(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains(BRANDS_FILE));
    }

    #[test]
    fn test_missing_required_field_is_fatal() {
        let tmp = fixture_dir();
        write(tmp.path(), SPOTS_FILE, json!([{ "id": 1, "starting_bid": 10 }]));

        let err = Catalog::load(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_inconsistent_project_is_fatal() {
        let tmp = fixture_dir();
        write(
            tmp.path(),
            PROJECTS_FILE,
            json!([{
                "id": 7,
                "target_audience": "young",
                "rent_min": 600,
                "rent_max": 500,
                "available_area": 200
            }]),
        );

        let err = Catalog::load(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { file: PROJECTS_FILE, .. }));
    }
}

//! Catalog Data Store
//!
//! Loads the five source documents once at startup and keeps them in memory
//! for the lifetime of the process:
//! - `projects.json` → [`Project`](types::project::Project)
//! - `brands.json` → [`Brand`](types::brand::Brand)
//! - `biddable_spots.json` → [`BiddingSpot`](types::spot::BiddingSpot), handed to the bidding ledger
//! - `available_locations.json` → [`Location`](types::location::Location)
//! - `heatmap_data.json` → [`HeatmapCell`](types::heatmap::HeatmapCell)
//!
//! Any missing, malformed or inconsistent document aborts the load; the
//! service has no useful degraded mode without its catalog.

pub mod loader;
pub mod search;
pub mod validate;

pub use loader::{Catalog, LoadError};
pub use search::{search, LocationQuery};

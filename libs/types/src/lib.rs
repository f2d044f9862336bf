//! Types library for the real-estate catalog service
//!
//! This library provides the entity definitions shared by the catalog loader,
//! the matching engine, the bidding ledger and the HTTP gateway.
//!
//! # Modules
//! - `ids`: Typed identifiers (ProjectId, SpotId)
//! - `project`: Commercial projects looking for tenants
//! - `brand`: Brands looking for space, and their scored matches
//! - `spot`: Biddable advertising spots and their derived views
//! - `location`: Available locations for the location finder
//! - `heatmap`: Opaque heatmap cells
//! - `numeric`: JSON encoding of decimal quantities
//! - `errors`: Error taxonomy

pub mod brand;
pub mod errors;
pub mod heatmap;
pub mod ids;
pub mod location;
pub mod numeric;
pub mod project;
pub mod spot;

/// Open map holding source fields the service does not interpret.
///
/// Flattened into each entity so unrecognized keys survive a load/serve round trip.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::brand::*;
    pub use crate::errors::*;
    pub use crate::heatmap::*;
    pub use crate::ids::*;
    pub use crate::location::*;
    pub use crate::project::*;
    pub use crate::spot::*;
    pub use crate::Attributes;
}

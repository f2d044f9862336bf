//! Error types for catalog operations
//!
//! Domain error taxonomy using thiserror. Transport concerns (status codes,
//! response bodies) live in the gateway.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::{ProjectId, SpotId};

/// Brand matching errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: ProjectId },
}

/// Bid placement errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BidError {
    #[error("Missing spot_id or bid_amount")]
    MissingFields,

    #[error("Spot not found: {spot_id}")]
    SpotNotFound { spot_id: SpotId },

    #[error("minimum bid is {minimum}")]
    BelowMinimum { minimum: Decimal },
}

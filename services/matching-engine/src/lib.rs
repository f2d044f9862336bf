//! Matching Engine
//!
//! Scores every brand in the catalog against one project and returns the
//! brands worth proposing, best first.
//!
//! **Scoring:**
//! - +50 shared target audience
//! - +30 brand rent budget inside the project's rent band (inclusive)
//! - +20 brand area requirement fits the project's available area
//!
//! **Key Invariants:**
//! - Only brands scoring strictly above 50 are returned, so an audience-only
//!   match (exactly 50) never qualifies
//! - Results are ordered by score, descending; equal scores keep catalog order
//! - Pure: the catalog is never modified

pub mod engine;
pub mod scoring;

pub use engine::match_brands;
pub use scoring::{score_brand, Scorecard};

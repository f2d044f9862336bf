//! Matching engine core
//!
//! Looks up the project, scores every brand against it and ranks the
//! qualifying ones.

use tracing::debug;
use types::brand::{Brand, BrandMatch};
use types::errors::MatchError;
use types::ids::ProjectId;
use types::project::Project;

use crate::scoring::score_brand;

const COMPUTED_KEYS: [&str; 2] = ["match_score", "reason"];

/// Rank the brands that suit a project
///
/// Fails with `ProjectNotFound` when no project carries `project_id`; a
/// missing project never yields a partial result.
pub fn match_brands(
    project_id: ProjectId,
    projects: &[Project],
    brands: &[Brand],
) -> Result<Vec<BrandMatch>, MatchError> {
    let project = projects
        .iter()
        .find(|p| p.id == project_id)
        .ok_or(MatchError::ProjectNotFound { project_id })?;

    let mut matches: Vec<BrandMatch> = brands
        .iter()
        .filter_map(|brand| {
            let card = score_brand(project, brand);
            card.qualifies().then(|| {
                let mut brand = brand.clone();
                // computed fields replace whatever the source object carried
                for key in COMPUTED_KEYS {
                    brand.extra.remove(key);
                }
                BrandMatch {
                    brand,
                    match_score: card.score,
                    reason: card.reason(),
                }
            })
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        %project_id,
        candidates = brands.len(),
        matched = matches.len(),
        "brand matching complete"
    );

    Ok(matches)
}

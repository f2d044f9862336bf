//! Scoring rules
//!
//! Each rule is checked independently; matched rules are recorded in the
//! fixed order audience, rent, area.

use types::brand::Brand;
use types::project::Project;

pub const AUDIENCE_WEIGHT: u32 = 50;
pub const RENT_WEIGHT: u32 = 30;
pub const AREA_WEIGHT: u32 = 20;

/// A brand is proposed only when its score is strictly above this.
pub const INCLUSION_THRESHOLD: u32 = 50;

pub const AUDIENCE_REASON: &str = "audience match";
pub const RENT_REASON: &str = "rent budget match";
pub const AREA_REASON: &str = "area requirement satisfied";

/// Separator between reasons in a match's `reason` field
pub const REASON_SEPARATOR: &str = "; ";

/// Outcome of scoring one brand against one project
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scorecard {
    pub score: u32,
    pub reasons: Vec<&'static str>,
}

impl Scorecard {
    fn award(&mut self, weight: u32, reason: &'static str) {
        self.score += weight;
        self.reasons.push(reason);
    }

    pub fn qualifies(&self) -> bool {
        self.score > INCLUSION_THRESHOLD
    }

    pub fn reason(&self) -> String {
        self.reasons.join(REASON_SEPARATOR)
    }
}

/// Score a brand against a project
pub fn score_brand(project: &Project, brand: &Brand) -> Scorecard {
    let mut card = Scorecard::default();

    if brand.target_audience == project.target_audience {
        card.award(AUDIENCE_WEIGHT, AUDIENCE_REASON);
    }
    if project.accepts_rent(brand.rent_budget) {
        card.award(RENT_WEIGHT, RENT_REASON);
    }
    if project.fits_area(brand.area_needed) {
        card.award(AREA_WEIGHT, AREA_REASON);
    }

    card
}

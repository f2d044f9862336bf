//! Biddable advertising spot types
//!
//! Invariants (checked by the catalog loader, preserved by the ledger):
//! - `starting_bid >= 0`
//! - `bid_increment > 0`
//! - `current_bid >= starting_bid`, and only grows

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::ids::SpotId;
use crate::Attributes;

/// An advertising spot open for bidding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiddingSpot {
    pub id: SpotId,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub starting_bid: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub current_bid: Decimal,
    #[serde(serialize_with = "crate::numeric::serialize")]
    pub bid_increment: Decimal,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl BiddingSpot {
    /// Lowest bid the spot will currently accept.
    pub fn minimum_next_bid(&self) -> Decimal {
        self.current_bid + self.bid_increment
    }

    /// Percentage of the current bid over the starting bid, rounded to one decimal.
    ///
    /// Zero when the starting bid is zero. The rate is computed in `f64` and
    /// the exact binary result is rounded half to even, so a value such as
    /// 0.05 rounds the way its float representation (just above 0.05) does.
    pub fn premium_rate(&self) -> Decimal {
        if self.starting_bid <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let (Some(current), Some(starting)) =
            (self.current_bid.to_f64(), self.starting_bid.to_f64())
        else {
            return Decimal::ZERO;
        };

        let rate = (current - starting) / starting * 100.0;
        Decimal::from_f64_retain(rate)
            .map(|exact| exact.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven))
            .unwrap_or(Decimal::ZERO)
    }
}

const PREMIUM_RATE_KEY: &str = "premium_rate";

/// Read-only view of a spot with its derived premium rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotView {
    #[serde(flatten)]
    pub spot: BiddingSpot,
    pub premium_rate: Decimal,
}

impl From<BiddingSpot> for SpotView {
    fn from(mut spot: BiddingSpot) -> Self {
        // The derived field replaces any stale value carried by the source object
        spot.extra.remove(PREMIUM_RATE_KEY);
        let premium_rate = spot.premium_rate();
        Self { spot, premium_rate }
    }
}

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::errors::BidError;
use types::ids::SpotId;
use types::spot::{BiddingSpot, SpotView};

/// Current bids for every advertising spot
pub struct Ledger {
    spots: DashMap<SpotId, BiddingSpot>,
    // Load order, so listings come back the way the source file lists them
    order: Vec<SpotId>,
}

impl Ledger {
    pub fn new(spots: impl IntoIterator<Item = BiddingSpot>) -> Self {
        let map = DashMap::new();
        let mut order = Vec::new();

        for spot in spots {
            match map.entry(spot.id) {
                Entry::Vacant(slot) => {
                    order.push(spot.id);
                    slot.insert(spot);
                }
                Entry::Occupied(_) => {
                    warn!(spot_id = %spot.id, "duplicate spot ignored");
                }
            }
        }

        Self { spots: map, order }
    }

    /// Every spot with its premium rate, in load order
    pub fn list_spots(&self) -> Vec<SpotView> {
        self.order
            .iter()
            .filter_map(|id| self.get_spot(*id))
            .collect()
    }

    pub fn get_spot(&self, spot_id: SpotId) -> Option<SpotView> {
        self.spots
            .get(&spot_id)
            .map(|spot| SpotView::from(spot.value().clone()))
    }

    /// Place a bid on a spot, returning the new current bid
    ///
    /// A zero id or amount counts as missing, as does an absent one.
    pub fn place_bid(
        &self,
        spot_id: Option<SpotId>,
        bid_amount: Option<Decimal>,
    ) -> Result<Decimal, BidError> {
        let (spot_id, bid_amount) = match (spot_id, bid_amount) {
            (Some(id), Some(amount)) if id.get() != 0 && !amount.is_zero() => (id, amount),
            _ => return Err(BidError::MissingFields),
        };

        // Holding the entry guard makes the check and the store one critical section
        let mut spot = self
            .spots
            .get_mut(&spot_id)
            .ok_or(BidError::SpotNotFound { spot_id })?;

        let minimum = spot.minimum_next_bid();
        if bid_amount < minimum {
            debug!(%spot_id, %bid_amount, %minimum, "bid rejected");
            return Err(BidError::BelowMinimum { minimum });
        }

        let previous = spot.current_bid;
        spot.current_bid = bid_amount;
        info!(%spot_id, %previous, current_bid = %bid_amount, "bid accepted");

        Ok(spot.current_bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use types::Attributes;

    fn spot(id: u64, starting: i64, current: i64, increment: i64) -> BiddingSpot {
        BiddingSpot {
            id: SpotId::new(id),
            starting_bid: Decimal::from(starting),
            current_bid: Decimal::from(current),
            bid_increment: Decimal::from(increment),
            extra: Attributes::new(),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bid_below_minimum_is_rejected() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);

        let err = ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1050")))
            .unwrap_err();

        assert_eq!(err, BidError::BelowMinimum { minimum: dec("1100") });
        assert_eq!(err.to_string(), "minimum bid is 1100");
        assert_eq!(
            ledger.get_spot(SpotId::new(1)).unwrap().spot.current_bid,
            dec("1000")
        );
    }

    #[test]
    fn test_bid_at_minimum_is_accepted() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);

        let new_bid = ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1100")))
            .unwrap();

        assert_eq!(new_bid, dec("1100"));
        assert_eq!(
            ledger.get_spot(SpotId::new(1)).unwrap().spot.current_bid,
            dec("1100")
        );
    }

    #[test]
    fn test_accepted_amount_is_stored_verbatim() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);
        let new_bid = ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1337.5")))
            .unwrap();
        assert_eq!(new_bid, dec("1337.5"));
    }

    #[test]
    fn test_resubmitting_accepted_bid_fails() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);
        ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1100")))
            .unwrap();

        let err = ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1100")))
            .unwrap_err();
        assert_eq!(err, BidError::BelowMinimum { minimum: dec("1200") });
    }

    #[test]
    fn test_missing_fields() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);

        assert_eq!(
            ledger.place_bid(None, Some(dec("1100"))),
            Err(BidError::MissingFields)
        );
        assert_eq!(
            ledger.place_bid(Some(SpotId::new(1)), None),
            Err(BidError::MissingFields)
        );
        assert_eq!(
            ledger.place_bid(Some(SpotId::new(1)), Some(Decimal::ZERO)),
            Err(BidError::MissingFields)
        );
        assert_eq!(
            ledger.place_bid(Some(SpotId::new(0)), Some(dec("1100"))),
            Err(BidError::MissingFields)
        );
    }

    #[test]
    fn test_unknown_spot() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);
        assert_eq!(
            ledger.place_bid(Some(SpotId::new(2)), Some(dec("5000"))),
            Err(BidError::SpotNotFound {
                spot_id: SpotId::new(2)
            })
        );
    }

    #[test]
    fn test_list_keeps_load_order_and_derives_premium() {
        let ledger = Ledger::new(vec![
            spot(3, 1000, 1200, 100),
            spot(1, 0, 500, 50),
            spot(2, 2000, 2000, 100),
        ]);

        let views = ledger.list_spots();
        let ids: Vec<u64> = views.iter().map(|v| v.spot.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(views[0].premium_rate, dec("20"));
        assert_eq!(views[1].premium_rate, Decimal::ZERO);
        assert_eq!(views[2].premium_rate, Decimal::ZERO);
    }

    #[test]
    fn test_listing_reflects_accepted_bid() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);
        ledger
            .place_bid(Some(SpotId::new(1)), Some(dec("1500")))
            .unwrap();
        assert_eq!(ledger.list_spots()[0].premium_rate, dec("50"));
    }

    #[test]
    fn test_duplicate_spot_keeps_first() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100), spot(1, 5, 5, 1)]);
        assert_eq!(ledger.list_spots().len(), 1);
        assert_eq!(
            ledger.get_spot(SpotId::new(1)).unwrap().spot.starting_bid,
            dec("1000")
        );
    }

    #[test]
    fn test_concurrent_identical_bids_accept_once() {
        let ledger = Ledger::new(vec![spot(1, 1000, 1000, 100)]);
        let accepted = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    if ledger
                        .place_bid(Some(SpotId::new(1)), Some(dec("1100")))
                        .is_ok()
                    {
                        accepted.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(accepted.load(Ordering::SeqCst), 1);
        assert_eq!(
            ledger.get_spot(SpotId::new(1)).unwrap().spot.current_bid,
            dec("1100")
        );
    }

    proptest! {
        #[test]
        fn prop_acceptance_rule(
            current in 0i64..10_000,
            increment in 1i64..500,
            bid in 1i64..12_000,
        ) {
            let ledger = Ledger::new(vec![spot(1, 0, current, increment)]);
            let result = ledger.place_bid(Some(SpotId::new(1)), Some(Decimal::from(bid)));
            let stored = ledger.get_spot(SpotId::new(1)).unwrap().spot.current_bid;

            if bid >= current + increment {
                prop_assert_eq!(result, Ok(Decimal::from(bid)));
                prop_assert_eq!(stored, Decimal::from(bid));
            } else {
                prop_assert_eq!(
                    result,
                    Err(BidError::BelowMinimum { minimum: Decimal::from(current + increment) })
                );
                prop_assert_eq!(stored, Decimal::from(current));
            }
        }
    }
}

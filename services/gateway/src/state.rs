use bidding::Ledger;
use catalog::Catalog;
use std::sync::Arc;
use types::spot::BiddingSpot;

/// Application context shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<Ledger>,
}

impl AppState {
    pub fn new(catalog: Catalog, spots: Vec<BiddingSpot>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ledger: Arc::new(Ledger::new(spots)),
        }
    }
}

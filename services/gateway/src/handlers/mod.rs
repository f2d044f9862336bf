pub mod bidding;
pub mod listing;
pub mod locations;
pub mod matching;

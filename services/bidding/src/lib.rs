//! Bidding Ledger
//!
//! Holds the only mutable state of the service: the current bid of each
//! advertising spot. Everything else in the catalog is read-only.
//!
//! **Key Invariants:**
//! - `current_bid >= starting_bid` at all times
//! - A bid is accepted iff `bid_amount >= current_bid + bid_increment`
//! - An accepted bid is stored verbatim, so `current_bid` strictly increases
//! - The compare-and-store of a bid runs under the spot's entry lock; two
//!   concurrent bids can never both pass against the same `current_bid`
//!
//! Bids live in memory only and are lost on restart.

pub mod ledger;

pub use ledger::Ledger;

//! `agv-alloc` — the single-round order auction.
//!
//! Each tick, every released, still-pending order solicits bids from every
//! idle vehicle; the closest bidder (straight-line distance) wins and flips
//! to `Picking` immediately, leaving the idle pool for the rest of the pass.
//! Orders that find no bidder stay pending and simply re-enter the auction
//! next tick — there is no timeout and no re-auctioning of assigned orders.

pub mod auction;


pub use auction::{run_auction, Assignment};

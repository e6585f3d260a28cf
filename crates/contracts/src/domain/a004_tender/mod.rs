pub mod aggregate;
pub mod sealing;

pub use aggregate::{BidStatus, BidView, Tender, TenderBid, TenderStatus, TenderView};
pub use sealing::{can_open_bids, seal_bid, SEALED_MASK};

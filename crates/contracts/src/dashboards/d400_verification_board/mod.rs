pub mod board;

pub use board::{partition, BoardColumn, VerificationBoardResponse, BUCKETS};

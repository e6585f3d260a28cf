pub mod d400_verification_board;
pub mod d401_asset_comparison;

pub use d400_verification_board::VerificationBoard;
pub use d401_asset_comparison::AssetComparison;

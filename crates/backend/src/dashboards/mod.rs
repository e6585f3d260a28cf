pub mod d400_verification_board;
pub mod d401_asset_comparison;

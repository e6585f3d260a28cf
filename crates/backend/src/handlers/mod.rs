pub mod a001_asset;
pub mod a002_technical_parameter;
pub mod a003_quotation_request;
pub mod a004_tender;
pub mod a005_contract;
pub mod d400_verification_board;
pub mod d401_asset_comparison;
pub mod u501_asset_submission;

pub mod a001_asset;
pub mod a002_technical_parameter;
pub mod a003_quotation_request;
pub mod a004_tender;
pub mod a005_contract;
pub mod common;

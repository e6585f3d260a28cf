pub mod u501_asset_submission;

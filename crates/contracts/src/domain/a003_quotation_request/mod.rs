pub mod aggregate;
pub mod estimate;

pub use aggregate::{CreateQuotationRequest, QuotationRequest, QuotationStatus};
pub use estimate::{estimate_hps, format_hps, rental_days, BUDGETARY};

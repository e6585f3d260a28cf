pub mod service;

pub use service::TenderStore;

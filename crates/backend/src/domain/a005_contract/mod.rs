pub mod service;

pub use service::ContractStore;

pub mod service;

pub use service::RegistryService;

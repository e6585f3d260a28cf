pub mod aggregate;
pub mod defaults;

pub use aggregate::{ParameterConfig, ParameterType, TechnicalParameter, UpdateParametersRequest};

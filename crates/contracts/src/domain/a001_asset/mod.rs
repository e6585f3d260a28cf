pub mod aggregate;
pub mod spec_value;

pub use aggregate::{Asset, AssetCategory, AssetId, AssetStatus, Coordinates, OwnerType};
pub use spec_value::{SpecMap, SpecValue};

pub mod list;
pub mod status;

pub mod list;
pub mod request;

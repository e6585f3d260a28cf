pub mod bki_client;

pub use bki_client::{BkiClient, BkiError, MockBkiClient};

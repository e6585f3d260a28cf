pub mod extractor;
pub mod middleware;
pub mod sessions;

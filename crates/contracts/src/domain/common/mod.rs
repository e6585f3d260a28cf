//! Общие части агрегатов: типизированный id и служебные метаданные записи

pub mod aggregate_id;
pub mod entity_metadata;

pub use aggregate_id::AggregateId;
pub use entity_metadata::EntityMetadata;

//! Реестр технических параметров по категориям активов.
//!
//! Создается явно и передается по ссылке: backend держит его за
//! `RwLock` (один писатель, много читателей), frontend - в сигнале
//! контекста. Неявного глобального состояния нет.

mod registry;

pub use registry::{duplicate_fields, ParameterRegistry};

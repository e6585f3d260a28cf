//! Общие контракты dashboard-а учета активов нефтегазовой отрасли.
//!
//! Crate не выполняет I/O: здесь живут агрегаты, реестр технических
//! параметров, движок динамической формы, мастер подачи актива и
//! производные представления (доска верификации, сравнение активов).
//! Backend и frontend используют одни и те же типы.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;

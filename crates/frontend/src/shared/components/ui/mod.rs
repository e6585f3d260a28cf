//! Простые элементы формы без собственного состояния: значение
//! приходит сигналом, изменения уходят в callback.

pub mod checkbox;
pub mod field;
pub mod radio;
pub mod select;

pub use checkbox::CheckItem;
pub use field::TextField;
pub use radio::RadioGroup;
pub use select::Select;

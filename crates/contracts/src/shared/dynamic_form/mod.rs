//! Движок динамической формы технических характеристик.
//!
//! Список типизированных дескрипторов (`TechnicalParameter`) задает и
//! раскладку полей, и приведение введенных значений. Раскладка - чистая
//! функция от категории и снимка реестра.

mod layout;
mod values;

pub use layout::{build_layout, FieldGroup, FormLayout};
pub use values::{parse_number, parse_year, DynamicSpecValues};

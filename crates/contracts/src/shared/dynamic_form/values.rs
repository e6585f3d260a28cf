use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_asset::{SpecMap, SpecValue};
use crate::domain::a002_technical_parameter::{ParameterType, TechnicalParameter};

/// Введенные значения динамических полей, адресуемые по `field`.
///
/// Числовые поля хранят текст как есть; разбор выполняется при подаче.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicSpecValues {
    values: BTreeMap<String, String>,
}

impl DynamicSpecValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущий текст поля, пустая строка если поле не заполнялось
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, raw: impl Into<String>) {
        self.values.insert(field.to_string(), raw.into());
    }

    /// Слияние по ключам: переданные поля перезаписываются, остальные остаются
    pub fn merge<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in entries {
            self.values.insert(k.into(), v.into());
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        parse_number(self.get(field))
    }

    /// Приведение значений по активным параметрам категории.
    ///
    /// Пустые поля и числа, которые не удалось разобрать, пропускаются.
    /// Повторяющийся `field` дает одну запись (побеждает последний).
    pub fn coerce(&self, params: &[TechnicalParameter]) -> SpecMap {
        let mut specs = SpecMap::new();
        for param in params {
            let raw = self.get(&param.field);
            let value = match param.param_type {
                ParameterType::Number => parse_number(raw).map(SpecValue::Number),
                ParameterType::String => {
                    let text = raw.trim();
                    (!text.is_empty()).then(|| SpecValue::Text(text.to_string()))
                }
            };
            if let Some(value) = value {
                specs.insert(param.field.clone(), value);
            }
        }
        specs
    }
}

/// Разбор числового текста; `None` для пустого и некорректного ввода
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Год постройки из текста; дробная часть отбрасывается
pub fn parse_year(raw: &str) -> Option<i32> {
    parse_number(raw)
        .map(f64::trunc)
        .filter(|y| *y >= i32::MIN as f64 && *y <= i32::MAX as f64)
        .map(|y| y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel_params() -> Vec<TechnicalParameter> {
        vec![
            TechnicalParameter::number("p1", "Year", "yearBuilt", None),
            TechnicalParameter::number("p4", "DWT", "dwt", Some("DWT")),
            TechnicalParameter::text("p5", "Flag", "flagCountry"),
        ]
    }

    #[test]
    fn coerce_parses_numbers_and_keeps_text() {
        let mut values = DynamicSpecValues::new();
        values.set("yearBuilt", "2015");
        values.set("dwt", " 2000.5 ");
        values.set("flagCountry", " Panama ");
        let specs = values.coerce(&vessel_params());
        assert_eq!(specs.get("yearBuilt"), Some(&SpecValue::Number(2015.0)));
        assert_eq!(specs.get("dwt"), Some(&SpecValue::Number(2000.5)));
        assert_eq!(specs.get("flagCountry"), Some(&SpecValue::Text("Panama".into())));
    }

    #[test]
    fn malformed_numbers_are_dropped_silently() {
        let mut values = DynamicSpecValues::new();
        values.set("dwt", "dua ribu");
        values.set("yearBuilt", "");
        let specs = values.coerce(&vessel_params());
        assert!(specs.is_empty());
        assert_eq!(values.number("dwt"), None);
    }

    #[test]
    fn fields_outside_active_set_are_ignored() {
        let mut values = DynamicSpecValues::new();
        values.set("ratedHP", "3000");
        assert!(values.coerce(&vessel_params()).is_empty());
    }

    #[test]
    fn duplicate_fields_collapse_to_one_entry() {
        let params = vec![
            TechnicalParameter::text("a", "Flag", "flagCountry"),
            TechnicalParameter::number("b", "Flag code", "flagCountry", None),
        ];
        let mut values = DynamicSpecValues::new();
        values.set("flagCountry", "62");
        let specs = values.coerce(&params);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs.get("flagCountry"), Some(&SpecValue::Number(62.0)));
    }

    #[test]
    fn merge_overwrites_only_given_keys() {
        let mut values = DynamicSpecValues::new();
        values.set("bollardPull", "80");
        values.set("dwt", "100");
        values.merge([("dwt", "2000"), ("yearBuilt", "2015")]);
        assert_eq!(values.get("bollardPull"), "80");
        assert_eq!(values.get("dwt"), "2000");
        assert_eq!(values.get("yearBuilt"), "2015");
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_year("2015.9"), Some(2015));
        assert_eq!(parse_year("abad ke-20"), None);
    }

    #[test]
    fn blank_values_count_as_empty() {
        let mut values = DynamicSpecValues::new();
        assert!(values.is_empty());
        values.set("dwt", "   ");
        assert!(values.is_empty());
        values.set("dwt", "5");
        assert!(!values.is_empty());
        values.clear();
        assert!(values.is_empty());
    }
}

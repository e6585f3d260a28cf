use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_asset::AssetCategory;

/// Тип значения технического параметра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[default]
    Number,
    String,
}

/// Описание одного редактируемого технического атрибута.
///
/// `field` - ключ, под которым значение хранится в `Asset::specs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalParameter {
    pub id: String,
    pub label: String,
    pub field: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl TechnicalParameter {
    pub fn number(id: &str, label: &str, field: &str, unit: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field: field.to_string(),
            param_type: ParameterType::Number,
            unit: unit.map(str::to_string),
            group: None,
        }
    }

    pub fn text(id: &str, label: &str, field: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field: field.to_string(),
            param_type: ParameterType::String,
            unit: None,
            group: None,
        }
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    /// Подпись поля с единицей измерения, если она задана
    pub fn display_label(&self) -> String {
        match &self.unit {
            Some(unit) if !self.label.contains(unit.as_str()) => {
                format!("{} ({})", self.label, unit)
            }
            _ => self.label.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("ID parameter tidak boleh kosong".into());
        }
        if self.field.trim().is_empty() {
            return Err(format!("Field untuk '{}' tidak boleh kosong", self.label));
        }
        Ok(())
    }
}

/// Конфигурация параметров: категория -> упорядоченный список
pub type ParameterConfig = BTreeMap<AssetCategory, Vec<TechnicalParameter>>;

/// DTO полной замены списка параметров одной категории
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateParametersRequest {
    pub parameters: Vec<TechnicalParameter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_type_key() {
        let p = TechnicalParameter::number("p4", "Deadweight (DWT)", "dwt", Some("DWT"));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["unit"], "DWT");
        assert!(json.get("group").is_none());

        let back: TechnicalParameter = serde_json::from_str(
            r#"{"id":"p5","label":"Bendera (Flag)","field":"flagCountry","type":"string"}"#,
        )
        .unwrap();
        assert_eq!(back.param_type, ParameterType::String);
        assert_eq!(back.unit, None);
    }

    #[test]
    fn display_label_appends_unit_once() {
        let bp = TechnicalParameter::number("lib2", "Bollard Pull", "bollardPull", Some("Ton"));
        assert_eq!(bp.display_label(), "Bollard Pull (Ton)");
        let dwt = TechnicalParameter::number("p4", "Deadweight (DWT)", "dwt", Some("DWT"));
        assert_eq!(dwt.display_label(), "Deadweight (DWT)");
    }

    #[test]
    fn config_serializes_with_category_keys() {
        let mut config = ParameterConfig::new();
        config.insert(AssetCategory::Vessel, vec![TechnicalParameter::text("p5", "Flag", "flagCountry")]);
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("Kapal").is_some());
        let back: ParameterConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}

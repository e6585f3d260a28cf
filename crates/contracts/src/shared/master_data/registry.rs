use std::collections::HashSet;

use crate::domain::a001_asset::AssetCategory;
use crate::domain::a002_technical_parameter::defaults::{available_library, initial_config};
use crate::domain::a002_technical_parameter::{ParameterConfig, TechnicalParameter};

/// Реестр параметров категорий
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRegistry {
    config: ParameterConfig,
}

impl ParameterRegistry {
    /// Реестр со встроенной начальной конфигурацией
    pub fn with_defaults() -> Self {
        Self {
            config: initial_config(),
        }
    }

    pub fn from_config(config: ParameterConfig) -> Self {
        Self { config }
    }

    /// Упорядоченный список параметров категории.
    /// Для ненастроенной категории - пустой срез.
    pub fn parameters(&self, category: AssetCategory) -> &[TechnicalParameter] {
        self.config
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Полная замена списка категории, без слияния.
    ///
    /// Уникальность `field` не проверяется: при совпадении ключей
    /// значения в карте спецификаций перезаписываются последним полем.
    pub fn set_parameters(&mut self, category: AssetCategory, params: Vec<TechnicalParameter>) {
        self.config.insert(category, params);
    }

    /// Каталог полей для редактора мастер-данных
    pub fn available_parameters(&self) -> &'static [TechnicalParameter] {
        available_library()
    }

    pub fn config(&self) -> &ParameterConfig {
        &self.config
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Значения `field`, встречающиеся в списке более одного раза (в порядке
/// первого повтора)
pub fn duplicate_fields(params: &[TechnicalParameter]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for p in params {
        if !seen.insert(p.field.as_str()) && !duplicates.contains(&p.field) {
            duplicates.push(p.field.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TechnicalParameter> {
        vec![
            TechnicalParameter::number("x1", "Deck Area", "deckArea", Some("m2")),
            TechnicalParameter::number("x2", "Max Speed", "maxSpeed", Some("Knots")),
        ]
    }

    #[test]
    fn set_then_get_returns_exactly_the_new_list() {
        for category in AssetCategory::ALL {
            let mut registry = ParameterRegistry::with_defaults();
            registry.set_parameters(category, sample());
            assert_eq!(registry.parameters(category), sample().as_slice());
        }
    }

    #[test]
    fn replacement_does_not_touch_other_categories() {
        let mut registry = ParameterRegistry::with_defaults();
        let before = registry.parameters(AssetCategory::OnshoreRig).to_vec();
        registry.set_parameters(AssetCategory::Vessel, sample());
        assert_eq!(registry.parameters(AssetCategory::OnshoreRig), before.as_slice());
    }

    #[test]
    fn replacement_with_empty_list_clears_category() {
        let mut registry = ParameterRegistry::with_defaults();
        registry.set_parameters(AssetCategory::Vessel, Vec::new());
        assert!(registry.parameters(AssetCategory::Vessel).is_empty());
    }

    #[test]
    fn unconfigured_category_yields_empty() {
        let registry = ParameterRegistry::from_config(ParameterConfig::new());
        assert!(registry.parameters(AssetCategory::OffshoreRig).is_empty());
    }

    #[test]
    fn library_is_exposed() {
        let registry = ParameterRegistry::default();
        assert!(registry
            .available_parameters()
            .iter()
            .any(|p| p.field == "cantileverSkid"));
    }

    #[test]
    fn duplicates_are_reported_not_rejected() {
        let mut params = sample();
        params.push(TechnicalParameter::number("x3", "Speed again", "maxSpeed", None));
        params.push(TechnicalParameter::number("x4", "Speed thrice", "maxSpeed", None));
        assert_eq!(duplicate_fields(&params), vec!["maxSpeed".to_string()]);

        let mut registry = ParameterRegistry::with_defaults();
        registry.set_parameters(AssetCategory::Vessel, params.clone());
        assert_eq!(registry.parameters(AssetCategory::Vessel).len(), 4);
    }
}

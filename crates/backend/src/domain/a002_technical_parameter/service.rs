use std::sync::{Arc, PoisonError, RwLock};

use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::{ParameterConfig, TechnicalParameter};
use contracts::shared::master_data::{duplicate_fields, ParameterRegistry};

/// Процессный реестр параметров: один писатель, много читателей.
///
/// Блокировка не удерживается через `.await`; читатели получают копию.
#[derive(Clone, Default)]
pub struct RegistryService {
    inner: Arc<RwLock<ParameterRegistry>>,
}

impl RegistryService {
    pub fn new(registry: ParameterRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Снимок реестра для вычислений вне блокировки
    pub fn snapshot(&self) -> ParameterRegistry {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn config(&self) -> ParameterConfig {
        self.snapshot().config().clone()
    }

    pub fn get_parameters(&self, category: AssetCategory) -> Vec<TechnicalParameter> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .parameters(category)
            .to_vec()
    }

    /// Полная замена списка категории. Пустые `field` отклоняются,
    /// повторяющиеся только логируются.
    pub fn set_parameters(
        &self,
        category: AssetCategory,
        parameters: Vec<TechnicalParameter>,
    ) -> anyhow::Result<Vec<TechnicalParameter>> {
        for param in &parameters {
            param
                .validate()
                .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        }

        let duplicates = duplicate_fields(&parameters);
        if !duplicates.is_empty() {
            tracing::warn!(
                "Duplicate parameter fields for {}: {:?}; last value wins",
                category,
                duplicates
            );
        }

        let mut registry = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        registry.set_parameters(category, parameters);
        tracing::info!(
            "Technical parameters replaced for {} ({} fields)",
            category,
            registry.parameters(category).len()
        );
        Ok(registry.parameters(category).to_vec())
    }

    pub fn available_parameters(&self) -> Vec<TechnicalParameter> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .available_parameters()
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_new_list() {
        let service = RegistryService::new(ParameterRegistry::with_defaults());
        let params = vec![
            TechnicalParameter::number("x1", "Crane Capacity", "craneCapacity", Some("Ton")),
            TechnicalParameter::text("x2", "Class", "classSociety"),
        ];
        service
            .set_parameters(AssetCategory::Vessel, params.clone())
            .unwrap();
        assert_eq!(service.get_parameters(AssetCategory::Vessel), params);
        assert!(!service.get_parameters(AssetCategory::OnshoreRig).is_empty());
    }

    #[test]
    fn clones_share_one_registry() {
        let service = RegistryService::new(ParameterRegistry::with_defaults());
        let reader = service.clone();
        service.set_parameters(AssetCategory::OffshoreRig, Vec::new()).unwrap();
        assert!(reader.get_parameters(AssetCategory::OffshoreRig).is_empty());
        assert!(reader.snapshot().parameters(AssetCategory::OffshoreRig).is_empty());
    }

    #[test]
    fn duplicates_are_accepted() {
        let service = RegistryService::new(ParameterRegistry::with_defaults());
        let params = vec![
            TechnicalParameter::number("a", "DWT", "dwt", None),
            TechnicalParameter::number("b", "DWT lagi", "dwt", None),
        ];
        let stored = service.set_parameters(AssetCategory::Vessel, params).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn blank_field_is_rejected() {
        let service = RegistryService::new(ParameterRegistry::with_defaults());
        let params = vec![TechnicalParameter::text("a", "Tanpa field", " ")];
        assert!(service.set_parameters(AssetCategory::Vessel, params).is_err());
        assert!(!service.get_parameters(AssetCategory::Vessel).is_empty());
    }
}

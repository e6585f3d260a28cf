use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::AssetCategory;
use crate::domain::a002_technical_parameter::defaults::DEFAULT_GROUP;
use crate::domain::a002_technical_parameter::TechnicalParameter;
use crate::shared::master_data::ParameterRegistry;

/// Группа полей формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub name: String,
    pub parameters: Vec<TechnicalParameter>,
}

/// Раскладка формы: группы в порядке первого появления в реестре,
/// поля внутри группы - в порядке реестра.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormLayout {
    pub category: AssetCategory,
    pub groups: Vec<FieldGroup>,
}

impl FormLayout {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, name: &str) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Все поля подряд, в порядке отображения
    pub fn fields(&self) -> impl Iterator<Item = &TechnicalParameter> {
        self.groups.iter().flat_map(|g| g.parameters.iter())
    }
}

pub fn build_layout(category: AssetCategory, registry: &ParameterRegistry) -> FormLayout {
    let mut groups: Vec<FieldGroup> = Vec::new();
    for param in registry.parameters(category) {
        let name = param.group.as_deref().unwrap_or(DEFAULT_GROUP);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.parameters.push(param.clone()),
            None => groups.push(FieldGroup {
                name: name.to_string(),
                parameters: vec![param.clone()],
            }),
        }
    }
    FormLayout { category, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(layout: &FormLayout) -> Vec<&str> {
        layout.groups.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn ungrouped_parameters_land_in_general() {
        let registry = ParameterRegistry::with_defaults();
        let layout = build_layout(AssetCategory::Vessel, &registry);
        assert_eq!(names(&layout), vec!["General"]);
        let fields: Vec<_> = layout.fields().map(|p| p.field.as_str()).collect();
        assert_eq!(fields, vec!["yearBuilt", "bollardPull", "bhp", "dwt", "flagCountry"]);
    }

    #[test]
    fn groups_follow_first_appearance_and_keep_inner_order() {
        let mut registry = ParameterRegistry::with_defaults();
        registry.set_parameters(
            AssetCategory::OffshoreRig,
            vec![
                TechnicalParameter::number("a", "Water Depth", "waterDepth", Some("ft")).in_group("Marine"),
                TechnicalParameter::number("b", "Year", "yearBuilt", None),
                TechnicalParameter::number("c", "Deck Load", "variableDeckLoad", Some("Kips")).in_group("Marine"),
                TechnicalParameter::number("d", "Power", "ratedHP", Some("HP")).in_group("Drilling"),
                TechnicalParameter::number("e", "Quarters", "quartersCapacity", Some("Pax")),
            ],
        );
        let layout = build_layout(AssetCategory::OffshoreRig, &registry);
        assert_eq!(names(&layout), vec!["Marine", "General", "Drilling"]);

        let marine: Vec<_> = layout
            .group("Marine")
            .unwrap()
            .parameters
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(marine, vec!["a", "c"]);
        let general: Vec<_> = layout
            .group("General")
            .unwrap()
            .parameters
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(general, vec!["b", "e"]);
    }

    #[test]
    fn layout_recomputes_from_new_snapshot() {
        let mut registry = ParameterRegistry::with_defaults();
        let before = build_layout(AssetCategory::OnshoreRig, &registry);
        registry.set_parameters(AssetCategory::OnshoreRig, Vec::new());
        let after = build_layout(AssetCategory::OnshoreRig, &registry);
        assert!(!before.is_empty());
        assert!(after.is_empty());
    }
}

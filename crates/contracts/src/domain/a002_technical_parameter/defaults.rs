//! Встроенные значения мастер-данных: начальная конфигурация категорий
//! и библиотека всех доступных технических полей.

use once_cell::sync::Lazy;

use super::aggregate::{ParameterConfig, TechnicalParameter};
use crate::domain::a001_asset::AssetCategory;

/// Группа для параметров без явного `group`
pub const DEFAULT_GROUP: &str = "General";

const YEAR_LABEL: &str = "Tahun Pembuatan (Year)";

/// Начальная конфигурация, создается один раз при старте приложения
pub fn initial_config() -> ParameterConfig {
    let mut config = ParameterConfig::new();
    config.insert(
        AssetCategory::Vessel,
        vec![
            TechnicalParameter::number("p1", YEAR_LABEL, "yearBuilt", None),
            TechnicalParameter::number("p2", "Bollard Pull (Ton)", "bollardPull", Some("Ton")),
            TechnicalParameter::number("p3", "Brake Horse Power (BHP)", "bhp", Some("BHP")),
            TechnicalParameter::number("p4", "Deadweight (DWT)", "dwt", Some("DWT")),
            TechnicalParameter::text("p5", "Bendera (Flag)", "flagCountry"),
        ],
    );
    config.insert(
        AssetCategory::OffshoreRig,
        vec![
            TechnicalParameter::number("p6", YEAR_LABEL, "yearBuilt", None),
            TechnicalParameter::number("p7", "Rig Power (HP)", "ratedHP", Some("HP")),
            TechnicalParameter::number("p8", "Drilling Depth (ft)", "drillingDepth", Some("ft")),
            TechnicalParameter::number("p9", "Water Depth (ft)", "waterDepth", Some("ft")),
        ],
    );
    config.insert(
        AssetCategory::OnshoreRig,
        vec![
            TechnicalParameter::number("p10", YEAR_LABEL, "yearBuilt", None),
            TechnicalParameter::number("p11", "Rig Power (HP)", "ratedHP", Some("HP")),
            TechnicalParameter::number("p12", "Drilling Depth (ft)", "drillingDepth", Some("ft")),
        ],
    );
    config
}

static AVAILABLE_LIBRARY: Lazy<Vec<TechnicalParameter>> = Lazy::new(|| {
    vec![
        TechnicalParameter::number("lib1", YEAR_LABEL, "yearBuilt", None),
        TechnicalParameter::number("lib2", "Bollard Pull", "bollardPull", Some("Ton")),
        TechnicalParameter::number("lib3", "Brake Horse Power (BHP)", "bhp", Some("HP")),
        TechnicalParameter::number("lib4", "Deadweight (DWT)", "dwt", Some("Ton")),
        TechnicalParameter::number("lib5", "Deck Area", "deckArea", Some("m2")),
        TechnicalParameter::number("lib6", "Max Speed", "maxSpeed", Some("Knots")),
        TechnicalParameter::text("lib7", "Bendera (Flag)", "flagCountry"),
        TechnicalParameter::number("lib8", "Rig Power (HP)", "ratedHP", Some("HP")),
        TechnicalParameter::number("lib9", "Drilling Depth (ft)", "drillingDepth", Some("ft")),
        TechnicalParameter::number("lib10", "Water Depth (ft)", "waterDepth", Some("ft")),
        TechnicalParameter::number("lib11", "Quarters Capacity (Pax)", "quartersCapacity", Some("Pax")),
        TechnicalParameter::number("lib12", "Variable Deck Load", "variableDeckLoad", Some("Kips")),
        TechnicalParameter::number("lib13", "Cantilever Skid", "cantileverSkid", Some("ft")),
        TechnicalParameter::number("lib14", "Length Overall (LOA)", "loa", Some("m")),
    ]
});

/// Каталог полей, которые можно добавить в любую категорию
pub fn available_library() -> &'static [TechnicalParameter] {
    &AVAILABLE_LIBRARY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_defaults_with_unique_fields() {
        let config = initial_config();
        for category in AssetCategory::ALL {
            let params = config.get(&category).expect("category configured");
            assert!(!params.is_empty());
            let fields: HashSet<_> = params.iter().map(|p| p.field.as_str()).collect();
            assert_eq!(fields.len(), params.len(), "duplicate field in {}", category);
        }
    }

    #[test]
    fn library_ids_are_unique() {
        let ids: HashSet<_> = available_library().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), available_library().len());
    }
}

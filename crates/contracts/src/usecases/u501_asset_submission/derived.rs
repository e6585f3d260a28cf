//! Фиксированные бизнес-правила производных полей при подаче актива.
//! Правила привязаны к категории явно, а не к конфигурации реестра.

use crate::domain::a001_asset::{AssetCategory, OwnerType, SpecMap, SpecValue};

use super::documents::{PriorityTier, VerificationMode};

pub const PENDING_SPECS: &str = "Pending Specs";

fn number(specs: &SpecMap, field: &str) -> Option<SpecValue> {
    specs
        .get(field)
        .and_then(SpecValue::as_number)
        .map(SpecValue::Number)
}

/// Краткая сводка мощности актива
pub fn capacity_string(category: AssetCategory, specs: &SpecMap) -> String {
    match category {
        AssetCategory::Vessel => {
            if let Some(bp) = number(specs, "bollardPull") {
                format!("{} Ton BP", bp)
            } else if let Some(dwt) = number(specs, "dwt") {
                format!("{} DWT", dwt)
            } else {
                PENDING_SPECS.to_string()
            }
        }
        AssetCategory::OffshoreRig | AssetCategory::OnshoreRig => {
            let hp = number(specs, "ratedHP");
            let depth = number(specs, "drillingDepth");
            match (hp, depth) {
                (Some(hp), Some(depth)) => format!("{} HP / {} ft", hp, depth),
                (Some(hp), None) => format!("{} HP", hp),
                (None, Some(depth)) => format!("{} ft", depth),
                (None, None) => PENDING_SPECS.to_string(),
            }
        }
    }
}

pub fn owner_type(tier: PriorityTier) -> OwnerType {
    match tier {
        PriorityTier::Tier1 => OwnerType::National,
        PriorityTier::Tier2 | PriorityTier::Tier3 => OwnerType::Foreign,
    }
}

pub fn certification(mode: VerificationMode) -> &'static str {
    match mode {
        VerificationMode::RegistryBacked => "BKI Class",
        VerificationMode::NonRegistry => "Non-BKI",
    }
}

/// Флаг по умолчанию, если его не дал ни реестр, ни форма
pub fn default_flag(tier: PriorityTier) -> &'static str {
    match tier {
        PriorityTier::Tier1 => "Indonesia",
        PriorityTier::Tier2 | PriorityTier::Tier3 => "Foreign",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(entries: &[(&str, SpecValue)]) -> SpecMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn vessel_prefers_bollard_pull_then_dwt() {
        let both = specs(&[("bollardPull", 80.0.into()), ("dwt", 5000.0.into())]);
        assert_eq!(capacity_string(AssetCategory::Vessel, &both), "80 Ton BP");
        let dwt_only = specs(&[("dwt", 2000.0.into())]);
        assert_eq!(capacity_string(AssetCategory::Vessel, &dwt_only), "2000 DWT");
        assert_eq!(capacity_string(AssetCategory::Vessel, &SpecMap::new()), PENDING_SPECS);
    }

    #[test]
    fn rig_composes_power_and_depth() {
        let full = specs(&[("ratedHP", 3000.0.into()), ("drillingDepth", 25000.0.into())]);
        assert_eq!(capacity_string(AssetCategory::OnshoreRig, &full), "3000 HP / 25000 ft");
        let hp = specs(&[("ratedHP", 1500.0.into())]);
        assert_eq!(capacity_string(AssetCategory::OffshoreRig, &hp), "1500 HP");
        let depth = specs(&[("drillingDepth", 12000.0.into())]);
        assert_eq!(capacity_string(AssetCategory::OffshoreRig, &depth), "12000 ft");
        assert_eq!(capacity_string(AssetCategory::OnshoreRig, &SpecMap::new()), PENDING_SPECS);
    }

    #[test]
    fn text_values_do_not_count_as_numbers() {
        let text = specs(&[("dwt", SpecValue::from("banyak"))]);
        assert_eq!(capacity_string(AssetCategory::Vessel, &text), PENDING_SPECS);
    }

    #[test]
    fn owner_type_follows_tier() {
        assert_eq!(owner_type(PriorityTier::Tier1), OwnerType::National);
        assert_eq!(owner_type(PriorityTier::Tier2), OwnerType::Foreign);
        assert_eq!(owner_type(PriorityTier::Tier3), OwnerType::Foreign);
    }
}

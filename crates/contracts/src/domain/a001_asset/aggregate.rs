use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::spec_value::SpecMap;
use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор актива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub Uuid);

impl AssetId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for AssetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AssetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Товарный класс актива. Определяет набор технических параметров.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "Kapal")]
    Vessel,
    #[serde(rename = "Offshore Rig")]
    OffshoreRig,
    #[serde(rename = "Onshore Rig")]
    OnshoreRig,
}

impl AssetCategory {
    /// Порядок выбора в мастере подачи
    pub const ALL: [AssetCategory; 3] = [Self::Vessel, Self::OffshoreRig, Self::OnshoreRig];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vessel => "Kapal",
            Self::OffshoreRig => "Offshore Rig",
            Self::OnshoreRig => "Onshore Rig",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn is_vessel(&self) -> bool {
        matches!(self, Self::Vessel)
    }

    pub fn is_rig(&self) -> bool {
        !self.is_vessel()
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Статус жизненного цикла актива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    Inactive,
    Maintenance,
    /// Только что зарегистрирован, еще не проверен
    Registered,
    #[serde(rename = "Catalog_Filling")]
    CatalogFilling,
    Verification,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
            Self::Registered => "Registered",
            Self::CatalogFilling => "Catalog_Filling",
            Self::Verification => "Verification",
        }
    }
}

/// Принадлежность владельца (правила каботажа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    National,
    Foreign,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Координаты-заглушка для вновь поданных активов (Джакарта)
    pub const PLACEHOLDER: Coordinates = Coordinates { lat: -6.0, lng: 106.0 };
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Актив: судно, морская или наземная буровая установка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Регистрационный номер, например "RG-2023-001" или "PENDING-4821"
    pub number: String,
    pub name: String,
    pub category: AssetCategory,
    #[serde(rename = "subType", default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub status: AssetStatus,

    pub location: String,
    pub coordinates: Coordinates,

    #[serde(rename = "dailyRate")]
    pub daily_rate: f64,
    pub health: f64,
    #[serde(rename = "csmsScore")]
    pub csms_score: f64,

    pub certification: String,
    #[serde(rename = "yearBuilt")]
    pub year_built: i32,
    /// Краткая сводка мощности, например "80 Ton BP" или "3000 HP / 25000 ft"
    #[serde(rename = "capacityString")]
    pub capacity: String,
    pub manufacturer: String,

    #[serde(rename = "flagCountry", default, skip_serializing_if = "Option::is_none")]
    pub flag_country: Option<String>,
    #[serde(rename = "ownerType", default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
    #[serde(rename = "ownerVendorId", default, skip_serializing_if = "Option::is_none")]
    pub owner_vendor_id: Option<String>,
    #[serde(rename = "imoNumber", default, skip_serializing_if = "Option::is_none")]
    pub imo_number: Option<String>,

    /// Технические характеристики по активным параметрам категории
    #[serde(default)]
    pub specs: SpecMap,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Asset {
    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Валидация данных перед записью в хранилище
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nama aset tidak boleh kosong".into());
        }
        if self.number.trim().is_empty() {
            return Err("Nomor aset tidak boleh kosong".into());
        }
        if !(0.0..=100.0).contains(&self.health) {
            return Err(format!("Health harus 0..100, diterima {}", self.health));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_match_master_data_keys() {
        assert_eq!(serde_json::to_string(&AssetCategory::Vessel).unwrap(), "\"Kapal\"");
        assert_eq!(
            serde_json::from_str::<AssetCategory>("\"Onshore Rig\"").unwrap(),
            AssetCategory::OnshoreRig
        );
        for c in AssetCategory::ALL {
            assert_eq!(AssetCategory::from_str(c.as_str()), Some(c));
        }
        assert_eq!(AssetCategory::from_str("Barge"), None);
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(
            serde_json::to_string(&AssetStatus::CatalogFilling).unwrap(),
            "\"Catalog_Filling\""
        );
        assert_eq!(AssetStatus::Registered.as_str(), "Registered");
    }
}

use chrono::Utc;
use contracts::domain::a001_asset::{
    Asset, AssetCategory, AssetId, AssetStatus, Coordinates, OwnerType, SpecMap, SpecValue,
};
use contracts::domain::common::EntityMetadata;
use uuid::Uuid;

/// Стабильные идентификаторы демо-записей, чтобы ссылки переживали перезапуск
const DEMO_IDS: [u128; 3] = [
    0x5f0c_1a00_0000_4000_8000_0000_0000_0001,
    0x5f0c_1a00_0000_4000_8000_0000_0000_0002,
    0x5f0c_1a00_0000_4000_8000_0000_0000_0003,
];

fn specs(entries: &[(&str, f64)]) -> SpecMap {
    entries
        .iter()
        .map(|(field, value)| (field.to_string(), SpecValue::Number(*value)))
        .collect()
}

/// Демо-активы: наземная буровая, судно AHTS и самоподъемная буровая
pub fn demo_assets() -> Vec<Asset> {
    let metadata = EntityMetadata::new_at(Utc::now());
    vec![
        Asset {
            id: AssetId::new(Uuid::from_u128(DEMO_IDS[0])),
            number: "RG-2023-001".into(),
            name: "Rig Darat A (Onshore)".into(),
            category: AssetCategory::OnshoreRig,
            sub_type: Some("Land Rig".into()),
            status: AssetStatus::Active,
            location: "Riau, WK Rokan".into(),
            coordinates: Coordinates { lat: 1.5, lng: 101.5 },
            daily_rate: 250_000_000.0,
            health: 98.0,
            csms_score: 92.0,
            certification: "BKI Class".into(),
            year_built: 2018,
            capacity: "2000 HP / 25000 ft".into(),
            manufacturer: "National Oilwell Varco".into(),
            flag_country: Some("Indonesia".into()),
            owner_type: Some(OwnerType::National),
            owner_vendor_id: Some("v-001".into()),
            imo_number: None,
            specs: specs(&[("ratedHP", 2000.0), ("drillingDepth", 25000.0)]),
            metadata: metadata.clone(),
        },
        Asset {
            id: AssetId::new(Uuid::from_u128(DEMO_IDS[1])),
            number: "VS-2022-045".into(),
            name: "Vessel B (AHTS)".into(),
            category: AssetCategory::Vessel,
            sub_type: Some("AHTS".into()),
            status: AssetStatus::Active,
            location: "Laut Jawa".into(),
            coordinates: Coordinates { lat: -5.5, lng: 107.5 },
            daily_rate: 150_000_000.0,
            health: 95.0,
            csms_score: 88.0,
            certification: "BKI Class".into(),
            year_built: 2015,
            capacity: "80 Ton BP / 5000 DWT".into(),
            manufacturer: "Damen Shipyards".into(),
            flag_country: Some("Indonesia".into()),
            owner_type: Some(OwnerType::National),
            owner_vendor_id: Some("v-002".into()),
            imo_number: Some("9781234".into()),
            specs: specs(&[("bollardPull", 80.0), ("dwt", 5000.0)]),
            metadata: metadata.clone(),
        },
        Asset {
            id: AssetId::new(Uuid::from_u128(DEMO_IDS[2])),
            number: "RG-OFF-009".into(),
            name: "Rig Lepas Pantai C (Jack-up)".into(),
            category: AssetCategory::OffshoreRig,
            sub_type: Some("Jack-up".into()),
            status: AssetStatus::Active,
            location: "Laut Natuna Utara".into(),
            coordinates: Coordinates { lat: 4.5, lng: 108.0 },
            daily_rate: 1_200_000_000.0,
            health: 92.0,
            csms_score: 90.0,
            certification: "ABS / BKI Dual Class".into(),
            year_built: 2012,
            capacity: "3000 HP / 400 ft Water Depth".into(),
            manufacturer: "Keppel FELS".into(),
            flag_country: Some("Panama".into()),
            owner_type: Some(OwnerType::Foreign),
            owner_vendor_id: Some("v-003".into()),
            imo_number: None,
            specs: specs(&[("ratedHP", 3000.0), ("drillingDepth", 30000.0), ("waterDepth", 400.0)]),
            metadata,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_assets_are_valid_and_unique() {
        let assets = demo_assets();
        assert_eq!(assets.len(), 3);
        for asset in &assets {
            assert!(asset.validate().is_ok(), "{}", asset.name);
        }
        assert_ne!(assets[0].id, assets[1].id);
        assert_eq!(assets[1].category, AssetCategory::Vessel);
        assert_eq!(demo_assets()[2].id, assets[2].id);
    }
}

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::estimate::{estimate_hps, format_hps};
use crate::domain::a001_asset::{Asset, AssetCategory};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuotationStatus {
    Approved,
    #[default]
    Pending,
    Review,
    Rejected,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заявка на коммерческое предложение (ME) по конкретному активу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    /// `ME-{год}-{4 цифры}`
    pub id: String,
    pub date: NaiveDate,
    pub asset_id: String,
    pub asset_name: String,
    pub category: AssetCategory,
    pub status: QuotationStatus,
    /// Отформатированная оценка или `Budgetary`
    pub hps: String,
    pub kkks_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_number: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

/// DTO создания заявки
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    pub asset_id: String,
    pub kkks_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_number: String,
    pub project_name: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl CreateQuotationRequest {
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.project_name, "Nama proyek wajib diisi"),
            (&self.kkks_name, "Nama KKKS wajib diisi"),
            (&self.contact_name, "Nama kontak wajib diisi"),
            (&self.contact_email, "Email kontak wajib diisi"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(message.into());
            }
        }
        Ok(())
    }
}

impl QuotationRequest {
    /// Новая заявка со статусом `Pending`; `serial` дает последние 4 цифры номера
    pub fn from_dto(dto: CreateQuotationRequest, asset: &Asset, now: DateTime<Utc>, serial: u32) -> Self {
        let hps = format_hps(estimate_hps(dto.date_from, dto.date_to, asset.daily_rate));
        Self {
            id: format!("ME-{}-{:04}", now.year(), serial % 10_000),
            date: now.date_naive(),
            asset_id: asset.to_string_id(),
            asset_name: asset.name.clone(),
            category: asset.category,
            status: QuotationStatus::Pending,
            hps,
            kkks_name: dto.kkks_name,
            contact_name: dto.contact_name,
            contact_email: dto.contact_email,
            contact_number: dto.contact_number,
            project_name: dto.project_name,
            additional_info: dto.additional_info.filter(|s| !s.trim().is_empty()),
            date_from: dto.date_from,
            date_to: dto.date_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::{AssetId, AssetStatus, Coordinates, SpecMap};
    use crate::domain::common::EntityMetadata;
    use chrono::TimeZone;

    fn rig() -> Asset {
        Asset {
            id: AssetId::new_v4(),
            number: "RG-2023-001".into(),
            name: "Rig Darat A (Onshore)".into(),
            category: AssetCategory::OnshoreRig,
            sub_type: None,
            status: AssetStatus::Active,
            location: "Duri".into(),
            coordinates: Coordinates::PLACEHOLDER,
            daily_rate: 250_000_000.0,
            health: 98.0,
            csms_score: 90.0,
            certification: "API 4F".into(),
            year_built: 2018,
            capacity: "2000 HP / 25000 ft".into(),
            manufacturer: "NOV".into(),
            flag_country: None,
            owner_type: None,
            owner_vendor_id: Some("v-001".into()),
            imo_number: None,
            specs: SpecMap::new(),
            metadata: EntityMetadata::default(),
        }
    }

    fn dto() -> CreateQuotationRequest {
        CreateQuotationRequest {
            project_name: "Sumur Eksplorasi X".into(),
            kkks_name: "PT Energi".into(),
            contact_name: "Budi".into(),
            contact_email: "budi@energi.co.id".into(),
            ..Default::default()
        }
    }

    #[test]
    fn creates_pending_request_with_estimate() {
        let asset = rig();
        let now = Utc.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap();
        let mut dto = dto();
        dto.date_from = NaiveDate::from_ymd_opt(2026, 6, 1);
        dto.date_to = NaiveDate::from_ymd_opt(2026, 6, 2);
        let request = QuotationRequest::from_dto(dto, &asset, now, 12345);
        assert_eq!(request.id, "ME-2026-2345");
        assert_eq!(request.status, QuotationStatus::Pending);
        assert_eq!(request.hps, "Rp 500.000.000,00");
        assert_eq!(request.asset_name, "Rig Darat A (Onshore)");
    }

    #[test]
    fn missing_dates_give_budgetary() {
        let request = QuotationRequest::from_dto(dto(), &rig(), Utc::now(), 7);
        assert_eq!(request.hps, "Budgetary");
        assert!(request.id.ends_with("-0007"));
    }

    #[test]
    fn dto_requires_contact_fields() {
        assert!(dto().validate().is_ok());
        let mut bad = dto();
        bad.contact_email = " ".into();
        assert!(bad.validate().is_err());
    }
}

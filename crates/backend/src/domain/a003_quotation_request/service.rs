use chrono::{DateTime, Utc};
use contracts::domain::a003_quotation_request::{CreateQuotationRequest, QuotationRequest};

use super::repository::QuotationStore;
use crate::domain::a001_asset::AssetStore;

#[derive(Debug, thiserror::Error)]
pub enum QuotationError {
    #[error("asset {0} not found")]
    AssetNotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Создание заявки по активу из хранилища
pub fn create(
    quotations: &QuotationStore,
    assets: &AssetStore,
    dto: CreateQuotationRequest,
    now: DateTime<Utc>,
) -> Result<QuotationRequest, QuotationError> {
    dto.validate().map_err(QuotationError::Validation)?;
    let asset = assets
        .get_by_id(&dto.asset_id)
        .ok_or_else(|| QuotationError::AssetNotFound(dto.asset_id.clone()))?;

    // последние 4 цифры текущего времени в миллисекундах
    let serial = (now.timestamp_millis().rem_euclid(10_000)) as u32;
    let request = QuotationRequest::from_dto(dto, &asset, now, serial);
    tracing::info!(
        "Quotation request {} created for '{}', HPS {}",
        request.id,
        request.asset_name,
        request.hps
    );
    quotations.insert(request.clone());
    Ok(request)
}

pub fn list_all(quotations: &QuotationStore) -> Vec<QuotationRequest> {
    quotations.list_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::seed::demo_assets;
    use chrono::{NaiveDate, TimeZone};

    fn dto(asset_id: String) -> CreateQuotationRequest {
        CreateQuotationRequest {
            asset_id,
            kkks_name: "Medco Energi".into(),
            contact_name: "Siti Aminah".into(),
            contact_email: "siti@medco.co.id".into(),
            contact_number: "0812".into(),
            project_name: "Logistik Natuna".into(),
            additional_info: None,
            date_from: NaiveDate::from_ymd_opt(2026, 5, 1),
            date_to: NaiveDate::from_ymd_opt(2026, 5, 10),
        }
    }

    #[test]
    fn creates_request_with_hps() {
        let assets = AssetStore::with_assets(demo_assets());
        let quotations = QuotationStore::new();
        let vessel = assets.list_all()[1].clone();
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

        let request = create(&quotations, &assets, dto(vessel.to_string_id()), now).unwrap();
        assert_eq!(request.hps, "Rp 1.500.000.000,00");
        assert!(request.id.starts_with("ME-2026-"));
        assert_eq!(list_all(&quotations).len(), 1);
    }

    #[test]
    fn unknown_asset_is_rejected() {
        let assets = AssetStore::new();
        let quotations = QuotationStore::new();
        let err = create(&quotations, &assets, dto("nope".into()), Utc::now()).unwrap_err();
        assert!(matches!(err, QuotationError::AssetNotFound(_)));
        assert!(list_all(&quotations).is_empty());
    }
}

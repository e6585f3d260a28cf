use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::usecases::u501_asset_submission::{BkiRecord, DocumentPolicy};

use crate::shared::state::AppState;
use crate::usecases::u501_asset_submission::BkiError;

/// GET /api/u501/bki/:imo
pub async fn lookup_bki(
    State(state): State<AppState>,
    Path(imo): Path<String>,
) -> Result<Json<BkiRecord>, StatusCode> {
    match state.bki.lookup(&imo).await {
        Ok(Some(record)) => {
            tracing::info!("BKI record found for IMO {}: {}", record.imo_number, record.name);
            Ok(Json(record))
        }
        Ok(None) => {
            tracing::info!("BKI record not found for IMO {}", imo.trim());
            Err(StatusCode::NOT_FOUND)
        }
        Err(BkiError::EmptyKey) => Err(StatusCode::BAD_REQUEST),
        Err(e) => {
            tracing::error!("BKI lookup failed: {}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// GET /api/u501/policy
pub async fn document_policy(State(state): State<AppState>) -> Json<DocumentPolicy> {
    Json(state.document_policy())
}

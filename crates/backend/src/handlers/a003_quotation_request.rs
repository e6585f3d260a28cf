use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use contracts::domain::a003_quotation_request::{CreateQuotationRequest, QuotationRequest};

use crate::domain::a003_quotation_request::service::{self, QuotationError};
use crate::shared::state::AppState;

/// GET /api/a003/quotation-request
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<QuotationRequest>> {
    Json(service::list_all(&state.quotations))
}

/// POST /api/a003/quotation-request
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateQuotationRequest>,
) -> Result<Json<QuotationRequest>, StatusCode> {
    match service::create(&state.quotations, &state.assets, dto, Utc::now()) {
        Ok(request) => Ok(Json(request)),
        Err(QuotationError::AssetNotFound(id)) => {
            tracing::warn!("Quotation for unknown asset {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::warn!("Quotation rejected: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

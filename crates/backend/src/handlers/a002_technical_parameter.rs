use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::{
    ParameterConfig, TechnicalParameter, UpdateParametersRequest,
};

use crate::shared::state::AppState;

fn parse_category(raw: &str) -> Result<AssetCategory, StatusCode> {
    AssetCategory::from_str(raw).ok_or_else(|| {
        tracing::warn!("Unknown asset category: {}", raw);
        StatusCode::BAD_REQUEST
    })
}

/// GET /api/a002/technical-parameters
pub async fn get_config(State(state): State<AppState>) -> Json<ParameterConfig> {
    Json(state.registry.config())
}

/// GET /api/a002/technical-parameters/library
pub async fn list_available(State(state): State<AppState>) -> Json<Vec<TechnicalParameter>> {
    Json(state.registry.available_parameters())
}

/// GET /api/a002/technical-parameters/:category
pub async fn get_parameters(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<TechnicalParameter>>, StatusCode> {
    let category = parse_category(&category)?;
    Ok(Json(state.registry.get_parameters(category)))
}

/// PUT /api/a002/technical-parameters/:category (admin)
pub async fn set_parameters(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<UpdateParametersRequest>,
) -> Result<Json<Vec<TechnicalParameter>>, StatusCode> {
    let category = parse_category(&category)?;
    match state.registry.set_parameters(category, request.parameters) {
        Ok(stored) => Ok(Json(stored)),
        Err(e) => {
            tracing::warn!("Parameter update rejected: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

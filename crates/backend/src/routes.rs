use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::shared::state::AppState;
use crate::system::auth::middleware::{require_admin, require_auth};
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_auth);
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout).route_layer(auth.clone()),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).route_layer(auth.clone()),
        )
        // ========================================
        // DOMAIN
        // ========================================
        // A001 Asset
        .route(
            "/api/a001/asset",
            get(handlers::a001_asset::list_all)
                .merge(post(handlers::a001_asset::create).route_layer(auth.clone())),
        )
        .route("/api/a001/asset/:id", get(handlers::a001_asset::get_by_id))
        // A002 Technical parameters (master data)
        .route(
            "/api/a002/technical-parameters",
            get(handlers::a002_technical_parameter::get_config),
        )
        .route(
            "/api/a002/technical-parameters/library",
            get(handlers::a002_technical_parameter::list_available),
        )
        .route(
            "/api/a002/technical-parameters/:category",
            get(handlers::a002_technical_parameter::get_parameters)
                .merge(put(handlers::a002_technical_parameter::set_parameters).route_layer(admin)),
        )
        // A003 Quotation request
        .route(
            "/api/a003/quotation-request",
            get(handlers::a003_quotation_request::list_all)
                .merge(post(handlers::a003_quotation_request::create).route_layer(auth.clone())),
        )
        // A004 Tender
        .route("/api/a004/tender", get(handlers::a004_tender::list_all))
        // A005 Contract
        .route("/api/a005/contract", get(handlers::a005_contract::list_all))
        .route("/api/a005/contract/:id", get(handlers::a005_contract::get_by_id))
        // ========================================
        // USECASES
        // ========================================
        .route(
            "/api/u501/bki/:imo",
            get(handlers::u501_asset_submission::lookup_bki),
        )
        .route(
            "/api/u501/policy",
            get(handlers::u501_asset_submission::document_policy),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/d400/verification-board",
            get(handlers::d400_verification_board::get_board),
        )
        .route(
            "/api/d401/compare",
            get(handlers::d401_asset_comparison::compare),
        )
        .with_state(state)
}

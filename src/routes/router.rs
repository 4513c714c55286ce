/**
 * Router Configuration
 *
 * Assembles the auth and admin route groups into the final router, adds
 * request tracing, and installs a JSON 404 fallback so even unknown paths
 * answer in the API's body shape.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::conversion::ErrorBody;
use crate::routes::admin_routes::configure_admin_routes;
use crate::routes::api_routes::configure_auth_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(configure_auth_routes(app_state.clone()))
        .merge(configure_admin_routes(app_state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// JSON 404 for unknown paths.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}

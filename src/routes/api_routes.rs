/**
 * Auth Route Handlers
 *
 * Routes for the `/api/auth` endpoints and their middleware layering.
 *
 * # Layering
 *
 * - `login` is public
 * - `status` carries `optional_auth`, which attaches the identity when a
 *   live session is presented but never rejects
 * - `logout` and `me` sit behind `authenticate`
 */

use axum::{middleware::from_fn_with_state, routing::get, routing::post, Router};

use crate::auth::{login, logout, me, status};
use crate::middleware::{authenticate, optional_auth};
use crate::server::state::AppState;

/// Configure the `/api/auth` routes.
pub fn configure_auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/status",
            get(status).route_layer(from_fn_with_state(state, optional_auth)),
        )
        .merge(protected)
}

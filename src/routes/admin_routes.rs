/**
 * Admin Route Handlers
 *
 * Routes for `/api/admin/members` and their middleware layering.
 *
 * # Layering
 *
 * Layers added later run earlier, so `authenticate` is added after
 * `require_admin`: a request is first resolved to a member, then checked
 * for admin privilege. An unauthenticated request gets 401 before the
 * admin gate is consulted.
 */

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, patch},
    Router,
};

use crate::admin::handlers::{
    create_member, delete_member, list_members, reset_password, update_status,
};
use crate::middleware::{authenticate, require_admin};
use crate::server::state::AppState;

/// Configure the `/api/admin` routes.
pub fn configure_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/members",
            get(list_members).post(create_member),
        )
        .route("/api/admin/members/{id}/status", patch(update_status))
        .route("/api/admin/members/{id}/password", patch(reset_password))
        .route("/api/admin/members/{id}", delete(delete_member))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state, authenticate))
}

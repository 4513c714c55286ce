/**
 * Logout Handler
 *
 * POST /api/auth/logout. Deletes the session row and clears the cookie.
 * The route sits behind the authentication middleware, so a request that
 * reaches here always carries a live session.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Json, Response},
};

use crate::auth::handlers::types::MessageResponse;
use crate::error::AuthError;
use crate::middleware::{clear_session_cookie, extract_session_token};
use crate::server::state::AppState;

/// Logout handler
///
/// Deletes the presented session and clears the cookie. Deletion is
/// idempotent at the service level; the response is 200 either way.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AuthError> {
    if let Some(token) = extract_session_token(&headers) {
        state.auth.logout(&token).await?;
    }

    let body = Json(MessageResponse {
        success: true,
        message: "Logout successful".to_string(),
    });

    Ok((
        [(SET_COOKIE, clear_session_cookie(state.cookie_secure))],
        body,
    )
        .into_response())
}

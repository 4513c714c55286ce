/**
 * Login Handler
 *
 * POST /api/auth/login. Verifies credentials through the authentication
 * service and installs the session token as an HttpOnly cookie.
 *
 * # Security
 *
 * - Unknown email and wrong password return the identical 401 body
 * - Inactive accounts are refused with 403 before password verification
 * - The token travels only in the cookie, never in the JSON body
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json, Response},
};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::is_valid_email;
use crate::error::AuthError;
use crate::middleware::session_cookie;
use crate::server::state::AppState;

/// Session cookie lifetime in seconds, aligned with the stored expiry.
const COOKIE_MAX_AGE_SECS: i64 = crate::auth::token::SESSION_TTL_DAYS * 24 * 60 * 60;

/// Login handler
///
/// Validates the request shape, authenticates through the service, and
/// responds with the sanitized member identity plus a Set-Cookie header.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or a malformed email
/// * `401 Unauthorized` - unknown email or wrong password
/// * `403 Forbidden` - account is inactive
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AuthError::validation("Email and password are required"));
    }
    if !is_valid_email(&request.email) {
        return Err(AuthError::validation("Invalid email format"));
    }

    let outcome = state.auth.login(&request.email, &request.password).await?;

    let cookie = session_cookie(&outcome.token, COOKIE_MAX_AGE_SECS, state.cookie_secure)
        .map_err(|err| AuthError::Internal(format!("session cookie: {err}")))?;

    let body = Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        member: outcome.member,
    });

    Ok(([(SET_COOKIE, cookie)], body).into_response())
}

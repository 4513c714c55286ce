/**
 * Authentication Middleware
 *
 * Session-cookie authentication for protected routes. The middleware reads
 * the session cookie, resolves the token through the session store, and
 * attaches the member identity to request extensions where handlers pick
 * it up through the `AuthMember` extractor.
 *
 * # Cookie Handling
 *
 * The session cookie is HttpOnly and SameSite=Lax, with `Secure` appended
 * when the server is configured for HTTPS deployments. Both the set and
 * clear forms are built here so the attributes cannot drift between the
 * login and logout paths.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{
        header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::auth::AuthMember;
use crate::error::conversion::ErrorBody;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session_token";

/// Build the Set-Cookie value that installs a session token.
pub fn session_cookie(
    token: &str,
    max_age_secs: i64,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build the Set-Cookie value that removes the session cookie.
pub fn clear_session_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static(
            "session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure",
        )
    } else {
        HeaderValue::from_static("session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

/// Pull the session token out of the Cookie header, if present.
///
/// Browsers send all cookies in one header; each pair is split on the
/// first `=` so token values containing `=` would survive intact.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;

    for pair in cookies.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next() == Some(SESSION_COOKIE_NAME) {
            let value = parts.next()?.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// 401 response for a token that no longer resolves, with the stale
/// cookie cleared so the browser stops presenting it.
fn stale_session_response(secure: bool) -> Response {
    let body = ErrorBody {
        success: false,
        message: "Invalid or expired session".to_string(),
    };
    let mut response = (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, clear_session_cookie(secure));
    response
}

/// Authentication middleware for protected routes.
///
/// 1. Extracts the session token from the cookie header
/// 2. Resolves it through the session store
/// 3. Rejects inactive members with 403
/// 4. Attaches [`AuthMember`] to request extensions
///
/// A missing cookie yields 401 without a Set-Cookie header; a cookie that
/// fails to resolve yields 401 and clears it.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(token) = extract_session_token(request.headers()) else {
        tracing::debug!("request without session cookie rejected");
        return Err(AuthError::Unauthorized(
            "Authentication required".to_string(),
        ));
    };

    let Some(session) = state.auth.resolve(&token).await? else {
        tracing::debug!("stale session token rejected");
        return Ok(stale_session_response(state.cookie_secure));
    };

    if !session.is_active() {
        tracing::warn!(member_id = session.member_id, "inactive member rejected");
        return Err(AuthError::AccountInactive);
    }

    request.extensions_mut().insert(AuthMember::from(&session));
    Ok(next.run(request).await)
}

/// Admin gate, layered inside `authenticate`.
///
/// Reads the identity `authenticate` attached; a non-admin member gets a
/// 403. Reaching this without the identity means the route was wired
/// without `authenticate`, which is treated as unauthenticated rather
/// than a panic.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AuthError> {
    let member = request
        .extensions()
        .get::<AuthMember>()
        .cloned()
        .ok_or_else(|| AuthError::Unauthorized("Authentication required".to_string()))?;

    if !member.is_admin {
        tracing::warn!(member_id = member.id, "admin route denied");
        return Err(AuthError::Forbidden("Admin privileges required".to_string()));
    }

    Ok(next.run(request).await)
}

/// Optional authentication, for the status probe.
///
/// Never rejects: a missing, stale, or inactive-member token simply leaves
/// the request anonymous. A presented token that no longer resolves gets
/// its cookie cleared on the way out.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let mut clear_stale = false;

    if let Some(token) = extract_session_token(request.headers()) {
        match state.auth.resolve(&token).await? {
            Some(session) if session.is_active() => {
                request.extensions_mut().insert(AuthMember::from(&session));
            }
            _ => clear_stale = true,
        }
    }

    let mut response = next.run(request).await;
    if clear_stale {
        response
            .headers_mut()
            .insert(SET_COOKIE, clear_session_cookie(state.cookie_secure));
    }
    Ok(response)
}

impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthMember>()
            .cloned()
            .ok_or_else(|| AuthError::Unauthorized("Authentication required".to_string()))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AuthMember>().cloned())
    }
}

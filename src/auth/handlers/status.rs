/**
 * Session Status Probe
 *
 * GET /api/auth/status. Always 200: reports whether the request carries a
 * live session without ever failing, so frontends can poll it on page
 * load. An inactive member's session reads as unauthenticated here; the
 * 403 treatment belongs to the protected routes.
 */

use axum::response::Json;

use crate::auth::handlers::types::StatusResponse;
use crate::auth::AuthMember;

/// Status probe handler
///
/// Layered with the optional authentication middleware, which attaches
/// the identity when the cookie resolves and stays silent otherwise.
pub async fn status(member: Option<AuthMember>) -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        authenticated: member.is_some(),
        member,
    })
}

/**
 * Current Member Handler
 *
 * GET /api/auth/me. Returns the identity the authentication middleware
 * attached; the extractor rejecting means the route was reached without
 * the middleware, which the extractor reports as 401.
 */

use axum::response::Json;

use crate::auth::handlers::types::MeResponse;
use crate::auth::AuthMember;

/// Current member handler
pub async fn me(member: AuthMember) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        member,
    })
}

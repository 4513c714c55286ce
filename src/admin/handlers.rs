/**
 * Admin Handlers
 *
 * HTTP handlers for /api/admin/members. Every route here sits behind the
 * authentication middleware plus the admin gate, so a handler always has
 * an admin `AuthMember` available through the extractor.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::admin::service::{CreatedMember, MemberSummary};
use crate::auth::handlers::types::MessageResponse;
use crate::auth::AuthMember;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Response of GET /api/admin/members.
#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub success: bool,
    pub members: Vec<MemberSummary>,
}

/// Body of POST /api/admin/members.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Response of POST /api/admin/members.
#[derive(Debug, Serialize)]
pub struct CreateMemberResponse {
    pub success: bool,
    pub message: String,
    pub member: CreatedMember,
}

/// Body of PATCH /api/admin/members/{id}/status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

/// Body of PATCH /api/admin/members/{id}/password.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub password: String,
}

/// List all members, newest first.
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<MembersResponse>, AuthError> {
    let members = state.admin.list_members().await?;
    Ok(Json(MembersResponse {
        success: true,
        members,
    }))
}

/// Create a member.
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<CreateMemberResponse>), AuthError> {
    let member = state
        .admin
        .create_member(
            &request.email,
            &request.password,
            &request.name,
            request.is_admin,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponse {
            success: true,
            message: "Member created successfully".to_string(),
            member,
        }),
    ))
}

/// Activate or deactivate a member.
///
/// The status string is parsed up front so anything but "active" or
/// "inactive" is a 400 before any storage work happens.
pub async fn update_status(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    acting: AuthMember,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let status = request.status.parse()?;
    state.admin.set_status(member_id, status, &acting).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Member status updated successfully".to_string(),
    }))
}

/// Reset a member's password, revoking their sessions.
pub async fn reset_password(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state
        .admin
        .reset_password(member_id, &request.password)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Password reset successfully".to_string(),
    }))
}

/// Delete a member and, through the cascade, their sessions.
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    acting: AuthMember,
) -> Result<Json<MessageResponse>, AuthError> {
    state.admin.delete_member(member_id, &acting).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Member deleted successfully".to_string(),
    }))
}

/**
 * Authentication Request/Response Types
 *
 * Serde types for the `/api/auth` endpoints. Every response carries a
 * `success` flag alongside its payload, matching the error body shape, so
 * clients branch on one field regardless of outcome.
 */

use serde::{Deserialize, Serialize};

use crate::auth::AuthMember;

/// Body of POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub member: AuthMember,
}

/// Plain acknowledgement, used by logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Response of GET /api/auth/status.
///
/// `member` is omitted entirely, not null, when unauthenticated.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<AuthMember>,
}

/// Response of GET /api/auth/me.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub member: AuthMember,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_missing_fields_default_to_empty() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
    }

    #[test]
    fn test_status_response_omits_absent_member() {
        let response = StatusResponse {
            success: true,
            authenticated: false,
            member: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("member").is_none());
    }

    #[test]
    fn test_member_serializes_camel_case() {
        let member = AuthMember {
            id: 1,
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            is_admin: true,
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["isAdmin"], true);
        assert!(json.get("is_admin").is_none());
    }
}

/**
 * Admin Operations Service
 *
 * Member management on top of the authentication service: list, create,
 * status changes, password resets, and deletion. Every operation takes
 * effect through the same repositories the login path uses, so a
 * deactivation or reset is visible to session resolution immediately.
 *
 * # Self-Action Guards
 *
 * `set_status` and `delete_member` receive the acting admin's identity
 * and refuse to target it. Password resets on one's own account are
 * allowed; they only force a fresh login.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::{is_valid_email, is_valid_password, password, AuthMember, AuthService};
use crate::db::members::{Member, MemberStatus};
use crate::error::AuthError;

/// Member as the admin list shows it. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub status: MemberStatus,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<Member> for MemberSummary {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            email: member.email,
            name: member.name,
            status: member.status,
            is_admin: member.is_admin,
            created_at: member.created_at,
            last_login: member.last_login,
        }
    }
}

/// Newly created member, echoed back to the creating admin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMember {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

/// Member management operations, gated behind the admin middleware.
#[derive(Clone)]
pub struct AdminService {
    auth: AuthService,
}

impl AdminService {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    /// All members, newest first.
    pub async fn list_members(&self) -> Result<Vec<MemberSummary>, AuthError> {
        let members = self.auth.members().list_all().await?;
        Ok(members.into_iter().map(MemberSummary::from).collect())
    }

    /// Create a member with a hashed password.
    ///
    /// The email is lowercased before storage, which is what makes the
    /// unique constraint case-insensitive in practice. A duplicate email
    /// surfaces from the constraint itself, not a racy pre-check.
    pub async fn create_member(
        &self,
        email: &str,
        plaintext: &str,
        name: &str,
        is_admin: bool,
    ) -> Result<CreatedMember, AuthError> {
        if email.is_empty() || plaintext.is_empty() || name.is_empty() {
            return Err(AuthError::validation(
                "Email, password, and name are required",
            ));
        }
        if !is_valid_email(email) {
            return Err(AuthError::validation("Invalid email format"));
        }
        if !is_valid_password(plaintext) {
            return Err(AuthError::validation(
                "Password must be at least 8 characters long",
            ));
        }

        let email = email.to_lowercase();
        let hashed = password::hash(plaintext).await?;
        let id = self
            .auth
            .members()
            .create(&email, &hashed, name, is_admin)
            .await?;

        tracing::info!(member_id = id, is_admin, "member created");
        Ok(CreatedMember {
            id,
            email,
            name: name.to_string(),
            is_admin,
        })
    }

    /// Set a member's status.
    ///
    /// Idempotent: setting the status a member already has succeeds, and
    /// an unknown id is a quiet no-op. Deactivation revokes the member's
    /// sessions so every device is logged out at once.
    pub async fn set_status(
        &self,
        target_id: i64,
        status: MemberStatus,
        acting: &AuthMember,
    ) -> Result<(), AuthError> {
        if target_id == acting.id {
            return Err(AuthError::SelfAction(
                "Cannot change your own status".to_string(),
            ));
        }

        self.auth.members().update_status(target_id, status).await?;
        if status == MemberStatus::Inactive {
            self.auth.revoke_all_for_member(target_id).await?;
        }

        tracing::info!(
            member_id = target_id,
            status = status.as_str(),
            acting_id = acting.id,
            "member status updated"
        );
        Ok(())
    }

    /// Replace a member's password and revoke their sessions.
    pub async fn reset_password(&self, target_id: i64, plaintext: &str) -> Result<(), AuthError> {
        self.auth.change_password(target_id, plaintext).await
    }

    /// Delete a member. Their sessions go with them through the cascade.
    pub async fn delete_member(
        &self,
        target_id: i64,
        acting: &AuthMember,
    ) -> Result<(), AuthError> {
        if target_id == acting.id {
            return Err(AuthError::SelfAction(
                "Cannot delete your own account".to_string(),
            ));
        }

        self.auth.members().delete(target_id).await?;
        tracing::info!(member_id = target_id, acting_id = acting.id, "member deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{MemoryMemberRepository, MemorySessionRepository, MemoryStore};
    use std::sync::Arc;

    fn services() -> (AuthService, AdminService) {
        let store = MemoryStore::new();
        let auth = AuthService::new(
            Arc::new(MemoryMemberRepository::new(store.clone())),
            Arc::new(MemorySessionRepository::new(store)),
        );
        (auth.clone(), AdminService::new(auth))
    }

    fn acting_admin(id: i64) -> AuthMember {
        AuthMember {
            id,
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn test_create_member_lowercases_email() {
        let (_, admin) = services();
        let created = admin
            .create_member("Alice@Example.COM", "Passw0rd!", "Alice", false)
            .await
            .unwrap();
        assert_eq!(created.email, "alice@example.com");
        assert!(!created.is_admin);
    }

    #[tokio::test]
    async fn test_create_member_duplicate_is_case_insensitive() {
        let (_, admin) = services();
        admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();

        let err = admin
            .create_member("ALICE@example.com", "Different1", "Other", false)
            .await
            .unwrap_err();
        match err {
            AuthError::DuplicateEmail => {}
            other => panic!("expected DuplicateEmail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_member_rejects_short_password() {
        let (_, admin) = services();
        let err = admin
            .create_member("alice@example.com", "short", "Alice", false)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_member_rejects_missing_fields() {
        let (_, admin) = services();
        assert!(admin
            .create_member("", "Passw0rd!", "Alice", false)
            .await
            .is_err());
        assert!(admin
            .create_member("alice@example.com", "Passw0rd!", "", false)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_list_members_newest_first() {
        let (_, admin) = services();
        let first = admin
            .create_member("first@example.com", "Passw0rd!", "First", false)
            .await
            .unwrap();
        let second = admin
            .create_member("second@example.com", "Passw0rd!", "Second", false)
            .await
            .unwrap();

        let members = admin.list_members().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, second.id);
        assert_eq!(members[1].id, first.id);
    }

    #[tokio::test]
    async fn test_set_status_rejects_self() {
        let (_, admin) = services();
        let created = admin
            .create_member("admin@example.com", "Passw0rd!", "Admin", true)
            .await
            .unwrap();

        let err = admin
            .set_status(created.id, MemberStatus::Inactive, &acting_admin(created.id))
            .await
            .unwrap_err();
        match err {
            AuthError::SelfAction(message) => {
                assert_eq!(message, "Cannot change your own status");
            }
            other => panic!("expected SelfAction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_status_is_idempotent() {
        let (auth, admin) = services();
        let created = admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();

        admin
            .set_status(created.id, MemberStatus::Active, &acting_admin(999))
            .await
            .unwrap();

        let member = auth
            .members()
            .find_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.status, MemberStatus::Active);
    }

    #[tokio::test]
    async fn test_deactivation_revokes_sessions() {
        let (auth, admin) = services();
        let created = admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();
        let outcome = auth.login("alice@example.com", "Passw0rd!").await.unwrap();

        admin
            .set_status(created.id, MemberStatus::Inactive, &acting_admin(999))
            .await
            .unwrap();

        assert!(auth.resolve(&outcome.token).await.unwrap().is_none());
        assert!(matches!(
            auth.login("alice@example.com", "Passw0rd!").await,
            Err(AuthError::AccountInactive)
        ));
    }

    #[tokio::test]
    async fn test_delete_rejects_self() {
        let (_, admin) = services();
        let created = admin
            .create_member("admin@example.com", "Passw0rd!", "Admin", true)
            .await
            .unwrap();

        let err = admin
            .delete_member(created.id, &acting_admin(created.id))
            .await
            .unwrap_err();
        match err {
            AuthError::SelfAction(message) => {
                assert_eq!(message, "Cannot delete your own account");
            }
            other => panic!("expected SelfAction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_member_and_sessions() {
        let (auth, admin) = services();
        let created = admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();
        let outcome = auth.login("alice@example.com", "Passw0rd!").await.unwrap();

        admin
            .delete_member(created.id, &acting_admin(999))
            .await
            .unwrap();

        assert!(auth
            .members()
            .find_by_id(created.id)
            .await
            .unwrap()
            .is_none());
        assert!(auth.resolve(&outcome.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_password_allows_new_login_only() {
        let (auth, admin) = services();
        let created = admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();

        admin.reset_password(created.id, "NewSecret9").await.unwrap();

        assert!(auth.login("alice@example.com", "Passw0rd!").await.is_err());
        assert!(auth.login("alice@example.com", "NewSecret9").await.is_ok());
    }

    #[tokio::test]
    async fn test_reset_password_rejects_short_password() {
        let (_, admin) = services();
        let created = admin
            .create_member("alice@example.com", "Passw0rd!", "Alice", false)
            .await
            .unwrap();

        let err = admin.reset_password(created.id, "short").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}

/**
 * Authentication Service
 *
 * The single implementation of credential verification and session
 * lifecycle, used by every route. It is constructed with explicit
 * repository instances - no ambient database handle - so the storage
 * engine is swappable without touching the logic here.
 *
 * # Session Validity
 *
 * A token resolves while its row exists, its expiry is in the future, and
 * its owner is active. `resolve` returns the joined session-member view
 * including the owner's status: the middleware turns an inactive owner
 * into a 403 while the status probe simply treats it as "not logged in",
 * and both read the same resolution.
 */

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::{password, token};
use crate::db::members::{MemberRepository, MemberStatus};
use crate::db::sessions::{SessionRepository, SessionWithMember};
use crate::error::AuthError;

/// Sanitized member identity: everything a handler may see or return.
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMember {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<&SessionWithMember> for AuthMember {
    fn from(session: &SessionWithMember) -> Self {
        Self {
            id: session.member_id,
            email: session.email.clone(),
            name: session.name.clone(),
            is_admin: session.is_admin,
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub token: String,
    pub member: AuthMember,
}

/// Credential verification and session lifecycle over injected
/// repositories.
#[derive(Clone)]
pub struct AuthService {
    members: Arc<dyn MemberRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(members: Arc<dyn MemberRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { members, sessions }
    }

    /// The member repository, for the admin operations layered on top.
    pub fn members(&self) -> &Arc<dyn MemberRepository> {
        &self.members
    }

    /// The session repository, for the periodic expired-session purge.
    pub(crate) fn sessions(&self) -> &Arc<dyn SessionRepository> {
        &self.sessions
    }

    /// Verify credentials and open a session.
    ///
    /// The email is lowercased before lookup. An unknown email and a wrong
    /// password fail identically with `InvalidCredentials`; an inactive
    /// account fails with `AccountInactive` before the password is even
    /// checked, matching what a suspended member is told elsewhere.
    pub async fn login(&self, email: &str, plaintext: &str) -> Result<LoginSuccess, AuthError> {
        let email = email.to_lowercase();

        let Some(member) = self.members.find_by_email(&email).await? else {
            tracing::warn!("login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if member.status != MemberStatus::Active {
            tracing::warn!(member_id = member.id, "login rejected: account inactive");
            return Err(AuthError::AccountInactive);
        }

        if !password::verify(plaintext, &member.password_hash).await? {
            tracing::warn!(member_id = member.id, "login failed: bad password");
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = token::generate();
        let expires_at = token::expiry_from(token::SESSION_TTL_DAYS);
        self.sessions
            .create(member.id, &session_token, expires_at)
            .await?;
        self.members.update_last_login(member.id).await?;

        tracing::info!(member_id = member.id, "member logged in");

        Ok(LoginSuccess {
            token: session_token,
            member: AuthMember {
                id: member.id,
                email: member.email,
                name: member.name,
                is_admin: member.is_admin,
            },
        })
    }

    /// Resolve a token to its session-member view.
    ///
    /// `None` for a token that was never issued, was revoked, or has
    /// expired. The view includes the owner's status; callers that need
    /// the active/inactive distinction read it from there.
    pub async fn resolve(&self, session_token: &str) -> Result<Option<SessionWithMember>, AuthError> {
        self.sessions.find_valid_by_token(session_token).await
    }

    /// Delete the session for a token. Idempotent: logging out twice, or
    /// with a token that never existed, succeeds quietly.
    pub async fn logout(&self, session_token: &str) -> Result<(), AuthError> {
        self.sessions.delete_by_token(session_token).await
    }

    /// Delete every session a member owns, forcing re-authentication on
    /// all their devices. Called after password resets and deactivation.
    pub async fn revoke_all_for_member(&self, member_id: i64) -> Result<(), AuthError> {
        self.sessions.delete_by_member_id(member_id).await
    }

    /// Replace a member's password and revoke all their sessions.
    pub async fn change_password(
        &self,
        member_id: i64,
        new_plaintext: &str,
    ) -> Result<(), AuthError> {
        if !crate::auth::is_valid_password(new_plaintext) {
            return Err(AuthError::validation(
                "Password must be at least 8 characters long",
            ));
        }

        let hashed = password::hash(new_plaintext).await?;
        self.members
            .update_password_hash(member_id, &hashed)
            .await?;
        self.revoke_all_for_member(member_id).await?;

        tracing::info!(member_id, "password changed, sessions revoked");
        Ok(())
    }
}

/**
 * Session Repository
 *
 * Sessions are rows keyed by an opaque random token. The only read path
 * joins the owning member, because a session without its member's current
 * status cannot be judged valid.
 *
 * # Expiry
 *
 * Expiry is lazy: `find_valid_by_token` checks the stored expiry at read
 * time and deletes the row when it has passed, so an expired session is
 * observably identical to a deleted one. `delete_expired` exists for
 * storage hygiene and is driven by a periodic task, not correctness.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db::members::MemberStatus;
use crate::error::AuthError;

/// A session joined with the fields of its owning member that the
/// middleware needs to judge the request.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionWithMember {
    pub member_id: i64,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub status: MemberStatus,
    pub expires_at: DateTime<Utc>,
}

impl SessionWithMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// CRUD over session records.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a session and return the new id.
    async fn create(
        &self,
        member_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<i64, AuthError>;

    /// Look up an unexpired session joined with its member. Missing and
    /// expired tokens both come back as `None`.
    async fn find_valid_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionWithMember>, AuthError>;

    /// Delete by token. Deleting an absent token is a no-op success.
    async fn delete_by_token(&self, token: &str) -> Result<(), AuthError>;

    /// Delete every session owned by a member, forcing re-authentication
    /// everywhere.
    async fn delete_by_member_id(&self, member_id: i64) -> Result<(), AuthError>;

    /// Purge expired rows; returns how many were removed.
    async fn delete_expired(&self) -> Result<u64, AuthError>;
}

/// SQLite-backed session repository.
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create(
        &self,
        member_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<i64, AuthError> {
        let result = sqlx::query(
            r#"
            INSERT INTO sessions (member_id, token, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(member_id)
        .bind(token)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_valid_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionWithMember>, AuthError> {
        let session = sqlx::query_as::<_, SessionWithMember>(
            r#"
            SELECT s.member_id, m.email, m.name, m.is_admin, m.status, s.expires_at
            FROM sessions s
            JOIN members m ON s.member_id = m.id
            WHERE s.token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        match session {
            Some(session) if session.expires_at > Utc::now() => Ok(Some(session)),
            Some(_) => {
                // Expired: remove the row so it cannot linger.
                self.delete_by_token(token).await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_member_id(&self, member_id: i64) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM sessions WHERE member_id = ?")
            .bind(member_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AuthError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

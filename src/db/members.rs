/**
 * Member Model and Repository
 *
 * This module defines the member record, its status enum, the repository
 * trait the rest of the crate programs against, and the SQLite
 * implementation of that trait.
 *
 * # Invariants
 *
 * - Emails are stored lowercased; the unique index on the column enforces
 *   case-insensitive uniqueness given that normalization.
 * - `password_hash` never leaves the repository boundary except inside a
 *   full `Member`, which only the auth service reads.
 * - Deleting a member cascades to the member's sessions at the storage
 *   layer (foreign key), not in application code.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AuthError;

/// Account status. Inactive members cannot log in and their live
/// sessions stop resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(AuthError::validation(
                "Status must be either \"active\" or \"inactive\"",
            )),
        }
    }
}

/// A member row as stored, including the password hash. Only the auth
/// service and the repositories handle this type; everything outward
/// facing uses sanitized views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub status: MemberStatus,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// CRUD over member records.
///
/// `create` expects an already-lowercased email and an already-hashed
/// password; callers own normalization and hashing.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a member and return the new id. A violated email uniqueness
    /// constraint comes back as [`AuthError::DuplicateEmail`].
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        is_admin: bool,
    ) -> Result<i64, AuthError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AuthError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AuthError>;

    /// All members, newest-created first.
    async fn list_all(&self) -> Result<Vec<Member>, AuthError>;

    async fn update_last_login(&self, id: i64) -> Result<(), AuthError>;

    /// Idempotent: re-applying the current status is a no-op success.
    async fn update_status(&self, id: i64, status: MemberStatus) -> Result<(), AuthError>;

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AuthError>;

    /// Delete the member; the storage layer cascade removes the member's
    /// sessions.
    async fn delete(&self, id: i64) -> Result<(), AuthError>;
}

/// SQLite-backed member repository.
#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const MEMBER_COLUMNS: &str =
    "id, email, password_hash, name, status, is_admin, created_at, last_login";

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        is_admin: bool,
    ) -> Result<i64, AuthError> {
        let result = sqlx::query(
            r#"
            INSERT INTO members (email, password_hash, name, is_admin, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(is_admin)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AuthError::DuplicateEmail
            } else {
                AuthError::Storage(err)
            }
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AuthError> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AuthError> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    async fn list_all(&self) -> Result<Vec<Member>, AuthError> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn update_last_login(&self, id: i64) -> Result<(), AuthError> {
        sqlx::query("UPDATE members SET last_login = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_status(&self, id: i64, status: MemberStatus) -> Result<(), AuthError> {
        sqlx::query("UPDATE members SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AuthError> {
        sqlx::query("UPDATE members SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AuthError> {
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

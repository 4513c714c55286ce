//! Database Module
//!
//! Repository traits for member and session storage, plus their SQLite
//! implementations.
//!
//! # Architecture
//!
//! - **`members`** - `MemberRepository` trait, `Member` model, SQLite impl
//! - **`sessions`** - `SessionRepository` trait, session-member join view,
//!   SQLite impl
//!
//! The authentication service holds the repositories as trait objects, so
//! the relational store can be swapped (a different engine, or an
//! in-memory double in tests) without touching any service logic. The SQL
//! implementations are the only place queries live.
//!
//! # Consistency
//!
//! Single-statement writes only. The unique index on `members.email` is the
//! sole guard against duplicate-member races: a violated constraint is
//! surfaced as [`AuthError::DuplicateEmail`](crate::AuthError), never
//! pre-checked. Member deletion relies on the `ON DELETE CASCADE` foreign
//! key to remove the member's sessions in the same statement.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Member model, repository trait, and SQLite implementation
pub mod members;

/// Session repository trait and SQLite implementation
pub mod sessions;

/// In-memory repository doubles for service-level tests
#[cfg(test)]
pub mod memory;

pub use members::{Member, MemberRepository, MemberStatus, SqliteMemberRepository};
pub use sessions::{SessionRepository, SessionWithMember, SqliteSessionRepository};

/// Open a SQLite pool with foreign keys enforced.
///
/// Foreign keys are off by default in SQLite and the sessions table
/// depends on its cascade, so every connection enables the pragma.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database exists per connection; cap the pool at one so
    // all queries see the same database.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

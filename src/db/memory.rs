/**
 * In-Memory Repository Doubles
 *
 * HashMap-backed implementations of the repository traits, compiled only
 * for tests. They mirror the storage-layer contracts the SQLite
 * implementations provide: lowercase-unique emails, cascade delete of a
 * member's sessions, and the read-time expiry check.
 */

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::db::members::{Member, MemberRepository, MemberStatus};
use crate::db::sessions::{SessionRepository, SessionWithMember};
use crate::error::AuthError;

#[derive(Debug, Clone)]
struct SessionRow {
    member_id: i64,
    token: String,
    expires_at: DateTime<Utc>,
}

/// Shared backing store so the session double can join member state.
#[derive(Default)]
pub struct MemoryStore {
    members: RwLock<HashMap<i64, Member>>,
    sessions: RwLock<Vec<SessionRow>>,
    next_member_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_member_id: AtomicI64::new(1),
            ..Default::default()
        })
    }
}

/// In-memory member repository.
#[derive(Clone)]
pub struct MemoryMemberRepository {
    store: Arc<MemoryStore>,
}

impl MemoryMemberRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        is_admin: bool,
    ) -> Result<i64, AuthError> {
        let mut members = self.store.members.write().await;
        if members.values().any(|m| m.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let id = self.store.next_member_id.fetch_add(1, Ordering::SeqCst);
        members.insert(
            id,
            Member {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                name: name.to_string(),
                status: MemberStatus::Active,
                is_admin,
                created_at: Utc::now(),
                last_login: None,
            },
        );
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AuthError> {
        let members = self.store.members.read().await;
        Ok(members.values().find(|m| m.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AuthError> {
        let members = self.store.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, AuthError> {
        let members = self.store.members.read().await;
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn update_last_login(&self, id: i64) -> Result<(), AuthError> {
        let mut members = self.store.members.write().await;
        if let Some(member) = members.get_mut(&id) {
            member.last_login = Some(Utc::now());
        }
        Ok(())
    }

    async fn update_status(&self, id: i64, status: MemberStatus) -> Result<(), AuthError> {
        let mut members = self.store.members.write().await;
        if let Some(member) = members.get_mut(&id) {
            member.status = status;
        }
        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AuthError> {
        let mut members = self.store.members.write().await;
        if let Some(member) = members.get_mut(&id) {
            member.password_hash = password_hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AuthError> {
        self.store.members.write().await.remove(&id);
        // Cascade, as the foreign key does in SQLite.
        self.store
            .sessions
            .write()
            .await
            .retain(|s| s.member_id != id);
        Ok(())
    }
}

/// In-memory session repository.
#[derive(Clone)]
pub struct MemorySessionRepository {
    store: Arc<MemoryStore>,
}

impl MemorySessionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn create(
        &self,
        member_id: i64,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<i64, AuthError> {
        let mut sessions = self.store.sessions.write().await;
        sessions.push(SessionRow {
            member_id,
            token: token.to_string(),
            expires_at,
        });
        Ok(sessions.len() as i64)
    }

    async fn find_valid_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionWithMember>, AuthError> {
        let row = {
            let sessions = self.store.sessions.read().await;
            sessions.iter().find(|s| s.token == token).cloned()
        };

        let Some(row) = row else { return Ok(None) };

        if row.expires_at <= Utc::now() {
            self.delete_by_token(token).await?;
            return Ok(None);
        }

        let members = self.store.members.read().await;
        Ok(members.get(&row.member_id).map(|m| SessionWithMember {
            member_id: m.id,
            email: m.email.clone(),
            name: m.name.clone(),
            is_admin: m.is_admin,
            status: m.status,
            expires_at: row.expires_at,
        }))
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), AuthError> {
        self.store
            .sessions
            .write()
            .await
            .retain(|s| s.token != token);
        Ok(())
    }

    async fn delete_by_member_id(&self, member_id: i64) -> Result<(), AuthError> {
        self.store
            .sessions
            .write()
            .await
            .retain(|s| s.member_id != member_id);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AuthError> {
        let now = Utc::now();
        let mut sessions = self.store.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|s| s.expires_at > now);
        Ok((before - sessions.len()) as u64)
    }
}

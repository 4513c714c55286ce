/**
 * Application State Management
 *
 * The shared state handed to every handler and middleware layer. Both
 * services are cheap to clone: each is a couple of `Arc`s around the
 * repositories, so axum cloning the state per request costs almost
 * nothing.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::admin::AdminService;
use crate::auth::AuthService;
use crate::db::members::SqliteMemberRepository;
use crate::db::sessions::SqliteSessionRepository;

/// Application state
///
/// # Fields
///
/// * `auth` - Authentication service (login, session resolution, logout)
/// * `admin` - Admin operations service, layered on `auth`
/// * `cookie_secure` - Whether session cookies carry the `Secure` attribute
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub admin: AdminService,
    pub cookie_secure: bool,
}

impl AppState {
    /// Build the state with SQLite-backed repositories over `pool`.
    pub fn new(pool: &SqlitePool, cookie_secure: bool) -> Self {
        let auth = AuthService::new(
            Arc::new(SqliteMemberRepository::new(pool.clone())),
            Arc::new(SqliteSessionRepository::new(pool.clone())),
        );
        let admin = AdminService::new(auth.clone());
        Self {
            auth,
            admin,
            cookie_secure,
        }
    }
}

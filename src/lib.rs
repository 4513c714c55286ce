//! Member Portal - Main Library
//!
//! Backend for a small membership dashboard: members authenticate with an
//! email and password, receive an opaque session token in an HttpOnly
//! cookie, and administrators manage member accounts over a privileged API.
//!
//! # Module Structure
//!
//! - **`auth`** - Credential hashing, session tokens, the authentication
//!   service, and the login/logout/me/status HTTP handlers
//! - **`admin`** - Privileged member management (list, create, status
//!   toggle, password reset, delete) with self-action guards
//! - **`middleware`** - Session-cookie authentication and admin gating
//! - **`db`** - Repository traits and their SQLite implementations
//! - **`server`** - Application state, configuration, initialization
//! - **`routes`** - HTTP route assembly
//! - **`error`** - The `AuthError` taxonomy and HTTP conversions
//!
//! # Session Model
//!
//! Sessions are database rows, not signed tokens: a 256-bit random token is
//! the lookup key, the row carries an absolute expiry, and a session is
//! valid only while it exists, is unexpired, and its owning member is
//! active. Revocation is therefore immediate - deleting the row ends the
//! session everywhere.
//!
//! # Usage
//!
//! ```rust,no_run
//! use member_portal::server::config::{Config, load_database};
//! use member_portal::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = Config::from_env();
//! let pool = load_database(&config.database_url).await?;
//! let app = create_app(&pool, config.cookie_secure);
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Credential hashing, session tokens, authentication service and handlers
pub mod auth;

/// Privileged member management operations and handlers
pub mod admin;

/// Repository traits and SQLite implementations
pub mod db;

/// Error taxonomy and HTTP conversions
pub mod error;

/// Session-cookie authentication and admin gating middleware
pub mod middleware;

/// HTTP route assembly
pub mod routes;

/// Application state, configuration, and initialization
pub mod server;

// Re-export commonly used types
pub use auth::service::{AuthMember, AuthService};
pub use error::AuthError;
pub use server::state::AppState;

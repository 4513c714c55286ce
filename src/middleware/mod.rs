//! Middleware Module
//!
//! HTTP middleware for the portal server. Middleware runs before handlers
//! and either rejects the request or enriches it with the authenticated
//! member identity.
//!
//! # Architecture
//!
//! - **`auth`** - Session-cookie authentication and admin gating
//!
//! Three layers are exported:
//!
//! - `authenticate` - requires a live session, attaches [`AuthMember`]
//! - `require_admin` - requires the attached member to be an admin
//! - `optional_auth` - attaches the identity when present, never rejects
//!
//! [`AuthMember`]: crate::auth::AuthMember

pub mod auth;

pub use auth::{
    authenticate, clear_session_cookie, extract_session_token, optional_auth, require_admin,
    session_cookie, SESSION_COOKIE_NAME,
};

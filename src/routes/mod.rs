//! Route Configuration Module
//!
//! Configures all HTTP routes for the portal server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports
//! ├── router.rs        - Main router assembly
//! ├── api_routes.rs    - /api/auth endpoints
//! └── admin_routes.rs  - /api/admin endpoints
//! ```
//!
//! # Route Overview
//!
//! ## Auth Routes
//!
//! - `POST /api/auth/login` - Verify credentials, open a session
//! - `POST /api/auth/logout` - Close the session (authenticated)
//! - `GET /api/auth/me` - Current member (authenticated)
//! - `GET /api/auth/status` - Session probe, never fails
//!
//! ## Admin Routes (authenticated + admin)
//!
//! - `GET /api/admin/members` - List members, newest first
//! - `POST /api/admin/members` - Create a member
//! - `PATCH /api/admin/members/{id}/status` - Activate/deactivate
//! - `PATCH /api/admin/members/{id}/password` - Reset password
//! - `DELETE /api/admin/members/{id}` - Delete a member

/// Main router assembly
pub mod router;

/// Auth endpoint routes
pub mod api_routes;

/// Admin endpoint routes
pub mod admin_routes;

// Re-export commonly used functions
pub use router::create_router;

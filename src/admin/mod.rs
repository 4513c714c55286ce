//! Admin Module
//!
//! Member management operations available only to administrators: listing
//! and creating members, activating and deactivating accounts, resetting
//! passwords, and deleting members.
//!
//! # Module Structure
//!
//! ```text
//! admin/
//! ├── mod.rs       - Module exports
//! ├── service.rs   - AdminService: the operations and their guards
//! └── handlers.rs  - HTTP handlers for /api/admin/members
//! ```
//!
//! # Self-Action Guards
//!
//! Status changes and deletion refuse to act on the calling admin's own
//! account. Without the guards an admin could deactivate or delete
//! themselves and lock the portal with no administrator left.

/// Admin operations service
pub mod service;

/// HTTP handlers for admin endpoints
pub mod handlers;

// Re-export commonly used types
pub use service::{AdminService, MemberSummary};

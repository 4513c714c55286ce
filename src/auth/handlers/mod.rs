//! Authentication Handlers
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports
//! ├── types.rs   - Request/response types
//! ├── login.rs   - POST /api/auth/login
//! ├── logout.rs  - POST /api/auth/logout
//! ├── me.rs      - GET /api/auth/me
//! └── status.rs  - GET /api/auth/status
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current-member handler
pub mod me;

/// Session status probe
pub mod status;

// Re-export handlers for route registration
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use status::status;

//! Authentication Module
//!
//! Credential hashing, opaque session tokens, the authentication service,
//! and the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and input validation helpers
//! ├── password.rs     - bcrypt hashing and verification
//! ├── token.rs        - Random session tokens and expiry computation
//! ├── service.rs      - AuthService: login, resolve, logout, revocation
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - POST /api/auth/login
//!     ├── logout.rs   - POST /api/auth/logout
//!     ├── me.rs       - GET /api/auth/me
//!     └── status.rs   - GET /api/auth/status
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: credentials verified → session row created → token set as
//!    an HttpOnly cookie and a sanitized identity returned
//! 2. **Request**: middleware reads the cookie, resolves the token through
//!    the session repository, and attaches the identity
//! 3. **Logout**: session row deleted, cookie cleared
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed; hashing runs on the blocking pool so the
//!   work factor cannot stall the async request path
//! - Tokens carry 256 bits of CSPRNG entropy and mean nothing off-server
//! - Unknown email and wrong password produce an identical rejection
//! - Password hashes never appear in any response type

/// bcrypt hashing and verification
pub mod password;

/// Session token generation and expiry computation
pub mod token;

/// The authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, logout, me, status};
pub use service::{AuthMember, AuthService, LoginSuccess};

/// Check the `local@domain.tld` shape: exactly one `@`, a non-empty local
/// part, a dotted domain, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The only enforced password policy: at least 8 characters.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 8
}

//! Error Module
//!
//! This module defines the error taxonomy shared by the authentication
//! service, the admin operations, and the HTTP layer.
//!
//! # Architecture
//!
//! - **`types`** - The `AuthError` enum and its status-code mapping
//! - **`conversion`** - `From` impls and the `IntoResponse` conversion
//!
//! Every failure a handler can produce is an `AuthError` variant; the
//! `IntoResponse` impl renders it as `{"success": false, "message": ...}`
//! with the appropriate status code, so no failure escapes as an opaque
//! panic or a bare status.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;

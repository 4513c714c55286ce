/**
 * Error Types
 *
 * This module defines `AuthError`, the single error type used across the
 * authentication service, admin operations, and HTTP handlers.
 *
 * # Error Categories
 *
 * - Validation failures: malformed input, reported with a specific message
 * - Authentication rejections: `InvalidCredentials` and `AccountInactive`.
 *   Unknown email and wrong password share one message so a caller cannot
 *   enumerate registered addresses; an inactive account is deliberately
 *   distinguishable so a suspended member knows to contact support.
 * - Authorization rejections: `Unauthorized` (no identity) and `Forbidden`
 *   (identity present, privilege missing)
 * - `SelfAction`: an admin attempting a destructive operation on their
 *   own account through the admin path
 * - Infrastructure faults: `Storage` and `Internal`, rendered as a generic
 *   message so nothing about the backend leaks to clients
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication and admin layers.
///
/// Each variant maps to one HTTP status code via [`AuthError::status_code`]
/// and carries the message that is sent to the client. Infrastructure
/// variants (`Storage`, `Internal`) keep their detail out of the client
/// message; the detail is logged server-side instead.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed input: bad email shape, short password, missing field.
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password. One message for both cases.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The member exists and the credentials or session are otherwise
    /// good, but the account has been deactivated.
    #[error("Account is inactive. Please contact support.")]
    AccountInactive,

    /// No usable identity on the request.
    #[error("{0}")]
    Unauthorized(String),

    /// Identity present but lacking the required privilege.
    #[error("{0}")]
    Forbidden(String),

    /// An admin tried to deactivate or delete their own account.
    #[error("{0}")]
    SelfAction(String),

    /// The storage layer's unique constraint on `members.email` fired.
    #[error("Email already registered")]
    DuplicateEmail,

    /// The relational store failed or is unreachable.
    #[error("A server error occurred")]
    Storage(#[source] sqlx::Error),

    /// Hashing task failure or another non-storage fault.
    #[error("A server error occurred")]
    Internal(String),
}

impl AuthError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The HTTP status code this error renders as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::SelfAction(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::AccountInactive | Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

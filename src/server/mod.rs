//! Server Module
//!
//! Server assembly: configuration, shared application state, and the
//! initialization sequence that wires the database, services, router,
//! and background maintenance together.
//!
//! # Architecture
//!
//! - **`config`** - Environment-driven configuration and database loading
//! - **`state`** - `AppState`, the shared state handed to every handler
//! - **`init`** - `create_app`, the full assembly sequence

/// Environment configuration and database loading
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly
pub mod init;

// Re-export commonly used items
pub use config::{load_database, Config};
pub use init::create_app;
pub use state::AppState;

/**
 * Server Initialization
 *
 * Assembles the application: state construction, route configuration, and
 * the background session purge.
 *
 * # Initialization Process
 *
 * 1. Build `AppState` over the connected pool
 * 2. Create the router with all routes and middleware
 * 3. Spawn the periodic expired-session purge
 *
 * # Session Purge
 *
 * Expired sessions are already rejected at resolution time, and the row
 * is dropped the moment a stale token is presented. The purge exists for
 * tokens that are never presented again; without it those rows would
 * accumulate forever.
 */

use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::create_router;
use crate::server::state::AppState;

/// Interval between expired-session sweeps.
const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Create and configure the Axum application.
pub fn create_app(pool: &SqlitePool, cookie_secure: bool) -> Router {
    tracing::info!("Initializing member portal server");

    let app_state = AppState::new(pool, cookie_secure);
    let app = create_router(app_state.clone());

    let purge_sessions = app_state.auth.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        // The first tick fires immediately, sweeping leftovers from
        // before the last shutdown.
        loop {
            interval.tick().await;
            match purge_sessions.sessions().delete_expired().await {
                Ok(0) => tracing::debug!("session purge: nothing to remove"),
                Ok(removed) => tracing::info!(removed, "purged expired sessions"),
                Err(err) => tracing::error!("session purge failed: {err}"),
            }
        }
    });

    tracing::info!("Router configured with session purge task");
    app
}

/**
 * Server Configuration
 *
 * Environment-driven configuration and database loading. Unlike services
 * that can degrade gracefully, the member database is the whole point of
 * this server, so a connection or migration failure here is fatal and
 * surfaces as an error rather than a disabled feature.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite:data/members.db`
 * - `SERVER_PORT` - listen port, default `3000`
 * - `COOKIE_SECURE` - set to `true` behind HTTPS so session cookies carry
 *   the `Secure` attribute
 */

use sqlx::SqlitePool;

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration, falling back to development defaults.
    ///
    /// A malformed `SERVER_PORT` falls back to the default with a warning
    /// instead of failing startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/members.db".to_string());

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("invalid SERVER_PORT {raw:?}, using 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            database_url,
            port,
            cookie_secure,
        }
    }
}

/// Connect to the database and bring the schema up to date.
///
/// 1. Opens the pool (creating the database file if missing)
/// 2. Runs embedded migrations
///
/// Migration failure is fatal: serving requests against a stale schema
/// would fail in stranger ways later.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = crate::db::connect(database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

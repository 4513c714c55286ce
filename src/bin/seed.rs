/**
 * Admin Seed Binary
 *
 * Creates the initial administrator account so a fresh deployment has a
 * way in. Idempotent: if the email already exists, nothing is written.
 *
 * # Environment Variables
 *
 * - `ADMIN_EMAIL` - default `admin@example.com`
 * - `ADMIN_PASSWORD` - required, no default; a well-known seeded password
 *   would be a standing credential on every deployment
 * - `ADMIN_NAME` - default `Admin User`
 */

use member_portal::auth::{is_valid_password, password};
use member_portal::db::members::{MemberRepository, SqliteMemberRepository};
use member_portal::server::config::{load_database, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let email = std::env::var("ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@example.com".to_string())
        .to_lowercase();
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin User".to_string());
    let plaintext = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| "ADMIN_PASSWORD must be set to seed the admin account")?;

    if !is_valid_password(&plaintext) {
        return Err("ADMIN_PASSWORD must be at least 8 characters long".into());
    }

    let config = Config::from_env();
    let pool = load_database(&config.database_url).await?;
    let members = SqliteMemberRepository::new(pool);

    if members.find_by_email(&email).await?.is_some() {
        tracing::info!(%email, "admin account already exists, nothing to do");
        return Ok(());
    }

    let hashed = password::hash(&plaintext).await?;
    let id = members.create(&email, &hashed, &name, true).await?;
    tracing::info!(member_id = id, %email, "admin account created");

    Ok(())
}

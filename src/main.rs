/**
 * Member Portal Server Entry Point
 *
 * Loads configuration, connects the database, and serves the API.
 */

use member_portal::server::config::{load_database, Config};
use member_portal::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,member_portal=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env();

    // The database is not optional here; fail loudly rather than serve
    // an API that cannot answer anything.
    let pool = load_database(&config.database_url).await?;

    let app = create_app(&pool, config.cookie_secure);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

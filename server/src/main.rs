//! HTTP service: accounts over PostgreSQL.
//!
//! Run from repo root: `cargo run -p rowkeep-server`

use rowkeep::{app, ensure_database_exists, ensure_tables, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rowkeep=info,rowkeep_server=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let connect_options = settings.database.connect_options()?;
    ensure_database_exists(&connect_options).await?;
    let pool = settings
        .database
        .pool_options()
        .connect_with(connect_options)
        .await?;
    ensure_tables(&pool).await?;

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(pool)).await?;
    Ok(())
}

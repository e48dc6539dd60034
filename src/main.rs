use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use moonstream_db::config::Config;
use moonstream_db::db::create_pool;
use moonstream_db::routes::create_routes;
use moonstream_db::utils::error::StartupError;

const PORT: u16 = 8931;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moonstream_db=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let pool = create_pool(&config).await?;

    let app = create_routes(&config, pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

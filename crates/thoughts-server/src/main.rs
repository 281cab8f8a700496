use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use thoughts_api::{AppState, AppStateInner};
use thoughts_db::MongoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "thoughts_server=debug,thoughts_api=debug,thoughts_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let mongo_url = std::env::var("MONGO_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017/happy-thoughts".into());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;

    // Connect once at startup; the driver pools connections for the rest of
    // the process lifetime.
    let store = MongoStore::connect(&mongo_url).await?;
    let state: AppState = Arc::new(AppStateInner {
        store: Box::new(store),
    });

    let app = thoughts_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Happy Thoughts API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

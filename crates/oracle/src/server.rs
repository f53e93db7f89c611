use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

use interface::RateSnapshot;

/// Path the widget polls.
pub const RATES_PATH: &str = "/api/rates";
/// Serverless-style alias of [`RATES_PATH`].
pub const SCRAPE_PATH: &str = "/.netlify/functions/scrape";

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<RwLock<RateSnapshot>>,
}

impl AppState {
    /// Starts out publishing the fallback snapshot until the first scrape lands.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(RateSnapshot::fallback())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn rates_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let data = state.snapshot.read().await.clone();
    Json(data)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(RATES_PATH, get(rates_handler))
        .route(SCRAPE_PATH, get(rates_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, port: u16) -> eyre::Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod handlers;
pub mod types;

use crate::{Result, config::Config, inference::HttpInferenceClient};
use axum::{Router, routing::any};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let inference = HttpInferenceClient::new(config.inference.clone())?;
    info!("Forwarding predictions to {}", inference.endpoint());

    let app = router(AppState {
        inference: Arc::new(inference),
        max_body_bytes: config.server.max_body_bytes,
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

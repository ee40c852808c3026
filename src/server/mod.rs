pub mod handlers;
mod page;
mod types;

pub use handlers::AppState;
pub use page::render_html;
pub use types::{FormSubmission, HealthResponse, SubmitRequest};

use crate::{
    Result,
    config::Config,
    form::FormController,
    prediction::HttpPredictionClient,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit_form))
        .route("/api/submit", post(handlers::submit_api))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    match config.api.url.as_deref() {
        Some(url) => info!("Prediction endpoint: {}", url),
        None => warn!("No prediction endpoint configured; submissions will fail until API_URL is set"),
    }

    let client = HttpPredictionClient::new(config.api.clone())?;

    let app_state = AppState {
        controller: Arc::new(FormController::new(Arc::new(client))),
        locale: config.ui.locale,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

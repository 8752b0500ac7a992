use std::path::Path;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{model::api::HealthDto, state::AppContext};

/// Builds the HTTP routes: a health check plus the static asset tree at `/`.
pub fn router(static_dir: &Path) -> Router<AppContext> {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Reports liveness along with the resolved mode and catalog size.
async fn health(State(context): State<AppContext>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        production: context.config.is_production(),
        commands: context.catalog.len(),
    })
}

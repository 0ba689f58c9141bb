pub mod config;
pub mod error;
pub mod jump;
pub mod pagination;
pub mod state;
pub mod urls;
pub mod web;

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use crate::pagination::{
    NavigationState, PageMarker, PageView, PageWindow, PageWindowBuilder, PaginationRequest,
    build,
};
pub use crate::urls::{QueryStringUrls, UrlBuilder};

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", web::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

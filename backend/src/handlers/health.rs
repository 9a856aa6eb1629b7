//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{services::CatalogService, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub catalog_store: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Pairing routes stay available even when the catalog store is down
    let environment = state.config.environment.clone();
    let catalog_status = if CatalogService::new(state.db).is_reachable().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment,
        catalog_store: catalog_status.to_string(),
    })
}

//! Route definitions for the Humidor Pairing Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check with catalog store status
        .route("/health", get(handlers::health_check))
        // Pairing engine (stateless)
        .nest("/pairings", pairing_routes())
        // Stored catalog cigars
        .nest("/cigars", cigar_routes())
}

/// Pairing engine routes
fn pairing_routes() -> Router<AppState> {
    Router::new()
        .route("/archetypes", get(handlers::list_beverage_archetypes))
        .route("/menu", get(handlers::get_pairing_menu))
        .route("/profile", post(handlers::derive_flavor_profile))
        .route("/smart", post(handlers::get_smart_pairings))
        .route("/reverse", post(handlers::get_reverse_pairing))
}

/// Catalog cigar routes
fn cigar_routes() -> Router<AppState> {
    Router::new().route("/:cigar_id/pairings", get(handlers::get_cigar_pairings))
}

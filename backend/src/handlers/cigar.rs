//! HTTP handlers for pairing stored catalog cigars

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::pairing::CigarPairings,
    services::{CatalogService, PairingService},
    AppState,
};

/// Rank beverage pairings for a cigar in the catalog
pub async fn get_cigar_pairings(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<CigarPairings>> {
    let Path(cigar_id) =
        path.map_err(|rejection| AppError::validation("cigar_id", rejection.body_text()))?;
    let cigar = CatalogService::new(state.db).get_cigar(cigar_id).await?;
    let pairings = PairingService::new().pair_catalog_cigar(cigar);
    Ok(Json(pairings))
}

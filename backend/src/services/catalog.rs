//! Read-only access to the external cigar catalog
//!
//! The catalog store is owned elsewhere; this service only reads the
//! identity, display, and pairing fields of a single record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Catalog service for looking up stored cigars
#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

/// Database row for a catalog cigar
#[derive(Debug, sqlx::FromRow)]
struct CigarRow {
    id: Uuid,
    name: String,
    brand: String,
    strength: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CigarRow> for CigarRecord {
    fn from(row: CigarRow) -> Self {
        CigarRecord {
            id: row.id,
            name: row.name,
            brand: row.brand,
            strength: row.strength,
            notes: row.notes.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

/// Cigar fields needed to render and pair a catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CigarRecord {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub strength: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch a single cigar by id
    pub async fn get_cigar(&self, cigar_id: Uuid) -> AppResult<CigarRecord> {
        let row = sqlx::query_as::<_, CigarRow>(
            r#"
            SELECT id, name, brand, strength, notes, created_at
            FROM cigars
            WHERE id = $1
            "#,
        )
        .bind(cigar_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cigar".to_string()))?;

        tracing::debug!(%cigar_id, name = %row.name, "Loaded catalog cigar");
        Ok(row.into())
    }

    /// Report whether the catalog store answers a trivial query
    pub async fn is_reachable(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db).await.is_ok()
    }
}

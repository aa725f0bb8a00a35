//! Developer entity model and DTOs.

use eventos_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A developer row from the `desenvolvedores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub nome_dev: String,
    /// Public path of the uploaded photo, e.g. `uploads/<uuid>.png`.
    #[serde(rename = "foto_URL")]
    pub foto_url: Option<String>,
    pub descricao_base: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a developer.
///
/// `nome_dev` is optional here; presence is enforced by the NOT NULL column so
/// a missing field surfaces as a store error, not a handler-level rejection.
#[derive(Debug, Clone, Default)]
pub struct CreateDeveloper {
    pub nome_dev: Option<String>,
    pub foto_url: Option<String>,
    pub descricao_base: Option<String>,
}

/// DTO for updating a developer. All fields are optional; `foto_url` is only
/// set when a new file was uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeveloper {
    pub nome_dev: Option<String>,
    pub foto_url: Option<String>,
    pub descricao_base: Option<String>,
}

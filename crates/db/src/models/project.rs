//! Project entity model and DTOs.

use eventos_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project row from the `projetos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub nome_projeto: String,
    #[serde(rename = "foto_URL")]
    pub foto_url: String,
    /// Free-form date string as supplied by the frontend.
    pub data_projeto: String,
    pub descricao: Option<String>,
    /// Reference to `desenvolvedores.id`; nullable and not FK-enforced.
    pub desenvolvedores_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. `nome_projeto`, `foto_url`, and `data_projeto`
/// are NOT NULL in the schema; a `None` here is rejected by the store.
#[derive(Debug, Clone, Default)]
pub struct CreateProject {
    pub nome_projeto: Option<String>,
    pub foto_url: Option<String>,
    pub data_projeto: Option<String>,
    pub descricao: Option<String>,
    pub desenvolvedores_id: Option<DbId>,
}

/// DTO for updating a project. All fields are optional; `foto_url` is only
/// set when a new file was uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub nome_projeto: Option<String>,
    pub foto_url: Option<String>,
    pub data_projeto: Option<String>,
    pub descricao: Option<String>,
    pub desenvolvedores_id: Option<DbId>,
}

//! Event entity model and DTOs.

use eventos_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An event row from the `eventos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub nome: String,
    /// Free-form date string as supplied by the frontend.
    pub data: String,
    pub descricao: Option<String>,
    /// Public path of the uploaded banner image.
    pub imagem: Option<String>,
    /// Comma-separated participant names.
    pub envolvidos: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event. `nome` and `data` are NOT NULL in the schema.
#[derive(Debug, Clone, Default)]
pub struct CreateEvent {
    pub nome: Option<String>,
    pub data: Option<String>,
    pub descricao: Option<String>,
    pub imagem: Option<String>,
    pub envolvidos: Option<String>,
}

/// DTO for updating an event. All fields are optional; `imagem` is only set
/// when a new file was uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub nome: Option<String>,
    pub data: Option<String>,
    pub descricao: Option<String>,
    pub imagem: Option<String>,
    pub envolvidos: Option<String>,
}

//! Event gallery image model and DTOs.

use eventos_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A gallery image row from the `galeria_eventos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub url_imagem: String,
    pub descricao: Option<String>,
    /// Reference to `eventos.id`; required and FK-enforced.
    pub evento_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery image. The image itself is required and is
/// checked at the handler boundary; `evento_id` is enforced by the FK.
#[derive(Debug, Clone)]
pub struct CreateGalleryImage {
    pub url_imagem: String,
    pub descricao: Option<String>,
    pub evento_id: Option<DbId>,
}

/// DTO for updating a gallery image. All fields are optional; `url_imagem` is
/// only set when a new file was uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateGalleryImage {
    pub url_imagem: Option<String>,
    pub descricao: Option<String>,
    pub evento_id: Option<DbId>,
}

//! Repository for the `galeria_eventos` table.

use eventos_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_image::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, url_imagem, descricao, evento_id, created_at, updated_at";

/// Provides CRUD operations for event gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery image, returning the created row.
    ///
    /// A missing or dangling `evento_id` is rejected by the NOT NULL + FK
    /// constraints.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO galeria_eventos (url_imagem, descricao, evento_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.url_imagem)
            .bind(&input.descricao)
            .bind(input.evento_id)
            .fetch_one(pool)
            .await
    }

    /// List all gallery images in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galeria_eventos ORDER BY id");
        sqlx::query_as::<_, GalleryImage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a gallery image. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE galeria_eventos SET
                url_imagem = COALESCE($2, url_imagem),
                descricao = COALESCE($3, descricao),
                evento_id = COALESCE($4, evento_id),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.url_imagem)
        .bind(&input.descricao)
        .bind(input.evento_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a gallery image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galeria_eventos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `desenvolvedores` table.

use eventos_core::types::DbId;
use sqlx::PgPool;

use crate::models::developer::{CreateDeveloper, Developer, UpdateDeveloper};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome_dev, foto_url, descricao_base, created_at, updated_at";

/// Provides CRUD operations for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Insert a new developer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDeveloper) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "INSERT INTO desenvolvedores (nome_dev, foto_url, descricao_base)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(&input.nome_dev)
            .bind(&input.foto_url)
            .bind(&input.descricao_base)
            .fetch_one(pool)
            .await
    }

    /// List all developers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Developer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM desenvolvedores ORDER BY id");
        sqlx::query_as::<_, Developer>(&query).fetch_all(pool).await
    }

    /// Update a developer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeveloper,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE desenvolvedores SET
                nome_dev = COALESCE($2, nome_dev),
                foto_url = COALESCE($3, foto_url),
                descricao_base = COALESCE($4, descricao_base),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.nome_dev)
        .bind(&input.foto_url)
        .bind(&input.descricao_base)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a developer by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM desenvolvedores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

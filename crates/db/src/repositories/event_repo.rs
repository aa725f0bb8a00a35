//! Repository for the `eventos` table.

use eventos_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, data, descricao, imagem, envolvidos, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO eventos (nome, data, descricao, imagem, envolvidos)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.nome)
            .bind(&input.data)
            .bind(&input.descricao)
            .bind(&input.imagem)
            .bind(&input.envolvidos)
            .fetch_one(pool)
            .await
    }

    /// List all events in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM eventos ORDER BY id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateEvent) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE eventos SET
                nome = COALESCE($2, nome),
                data = COALESCE($3, data),
                descricao = COALESCE($4, descricao),
                imagem = COALESCE($5, imagem),
                envolvidos = COALESCE($6, envolvidos),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.nome)
        .bind(&input.data)
        .bind(&input.descricao)
        .bind(&input.imagem)
        .bind(&input.envolvidos)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    ///
    /// Fails with an FK violation while gallery images still reference the
    /// event (hard delete, no cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

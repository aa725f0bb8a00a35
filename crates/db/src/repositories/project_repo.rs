//! Repository for the `projetos` table.

use eventos_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome_projeto, foto_url, data_projeto, descricao, \
                       desenvolvedores_id, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `nome_projeto`, `foto_url`, and `data_projeto` are NOT NULL columns, so
    /// a `None` in the input surfaces as a constraint violation.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projetos (nome_projeto, foto_url, data_projeto, descricao, desenvolvedores_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.nome_projeto)
            .bind(&input.foto_url)
            .bind(&input.data_projeto)
            .bind(&input.descricao)
            .bind(input.desenvolvedores_id)
            .fetch_one(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projetos ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projetos SET
                nome_projeto = COALESCE($2, nome_projeto),
                foto_url = COALESCE($3, foto_url),
                data_projeto = COALESCE($4, data_projeto),
                descricao = COALESCE($5, descricao),
                desenvolvedores_id = COALESCE($6, desenvolvedores_id),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.nome_projeto)
        .bind(&input.foto_url)
        .bind(&input.data_projeto)
        .bind(&input.descricao)
        .bind(input.desenvolvedores_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Handlers for the `/projetos` resource.
//!
//! POST and PUT accept multipart form data with an optional `foto_URL` file.
//! `desenvolvedores_id` arrives as a text field and is parsed to an id; the
//! reference itself is not validated against `desenvolvedores`.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use eventos_core::types::DbId;
use eventos_db::models::project::{CreateProject, Project, UpdateProject};
use eventos_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload;

/// Response for `POST /projetos`.
#[derive(Debug, Serialize)]
pub struct ProjectCreated {
    pub message: &'static str,
    pub projeto: Project,
}

/// GET /projetos and GET /projetos/{id}
///
/// Both serve the complete list: the legacy frontend fetches the collection
/// through the `/{id}` path, so the parameter is accepted and ignored.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projetos = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Erro ao listar projetos"))?;
    Ok(Json(projetos))
}

/// POST /projetos
///
/// A missing file leaves `foto_url` NULL and the NOT NULL column rejects the
/// insert, so creation without an image fails with the standard 400 envelope.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ProjectCreated>> {
    const CONTEXT: &str = "Erro ao criar projeto";

    let mut input = CreateProject::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome_projeto" => {
                input.nome_projeto = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "data_projeto" => {
                input.data_projeto = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao" => {
                input.descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "desenvolvedores_id" => {
                let text = field.text().await.map_err(AppError::op(CONTEXT))?;
                input.desenvolvedores_id =
                    Some(text.parse::<DbId>().map_err(AppError::op(CONTEXT))?);
            }
            "foto_URL" => {
                input.foto_url =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    let projeto = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(ProjectCreated {
        message: "Projeto criado!",
        projeto,
    }))
}

/// PUT /projetos/{id}
///
/// `foto_URL` is only overwritten when a new file is attached.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    const CONTEXT: &str = "Erro ao atualizar projeto";

    let mut input = UpdateProject::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome_projeto" => {
                input.nome_projeto = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "data_projeto" => {
                input.data_projeto = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao" => {
                input.descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "desenvolvedores_id" => {
                let text = field.text().await.map_err(AppError::op(CONTEXT))?;
                input.desenvolvedores_id =
                    Some(text.parse::<DbId>().map_err(AppError::op(CONTEXT))?);
            }
            "foto_URL" => {
                input.foto_url =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    ProjectRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(MessageResponse {
        message: "Projeto atualizado!",
    }))
}

/// DELETE /projetos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ProjectRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Erro ao deletar projeto"))?;

    Ok(Json(MessageResponse {
        message: "Projeto deletado!",
    }))
}

//! Handlers for the `/desenvolvedores` resource.
//!
//! POST and PUT accept multipart form data: text fields plus an optional
//! `foto_URL` file, which is persisted to the upload directory and stored as
//! its public path.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use eventos_core::types::DbId;
use eventos_db::models::developer::{CreateDeveloper, Developer, UpdateDeveloper};
use eventos_db::repositories::DeveloperRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload;

/// Response for `POST /desenvolvedores`.
#[derive(Debug, Serialize)]
pub struct DeveloperCreated {
    pub message: &'static str,
    pub dev: Developer,
}

/// GET /desenvolvedores
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Developer>>> {
    let devs = DeveloperRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Erro ao listar desenvolvedores"))?;
    Ok(Json(devs))
}

/// POST /desenvolvedores
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DeveloperCreated>> {
    const CONTEXT: &str = "Erro ao criar desenvolvedor";

    let mut input = CreateDeveloper::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome_dev" => {
                input.nome_dev = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao_base" => {
                input.descricao_base = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "foto_URL" => {
                input.foto_url =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {} // ignore unknown fields
        }
    }

    let dev = DeveloperRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(DeveloperCreated {
        message: "Desenvolvedor criado!",
        dev,
    }))
}

/// PUT /desenvolvedores/{id}
///
/// `foto_URL` is only overwritten when a new file is attached.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    const CONTEXT: &str = "Erro ao atualizar desenvolvedor";

    let mut input = UpdateDeveloper::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome_dev" => {
                input.nome_dev = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao_base" => {
                input.descricao_base = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "foto_URL" => {
                input.foto_url =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    DeveloperRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(MessageResponse {
        message: "Desenvolvedor atualizado!",
    }))
}

/// DELETE /desenvolvedores/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    DeveloperRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Erro ao deletar desenvolvedor"))?;

    Ok(Json(MessageResponse {
        message: "Desenvolvedor deletado!",
    }))
}

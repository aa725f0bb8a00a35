//! Handlers for the `/eventos` resource.
//!
//! POST and PUT accept multipart form data with an optional `imagem` file.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use eventos_core::types::DbId;
use eventos_db::models::event::{CreateEvent, Event, UpdateEvent};
use eventos_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload;

/// Response for `POST /eventos`.
#[derive(Debug, Serialize)]
pub struct EventCreated {
    pub message: &'static str,
    pub evento: Event,
}

/// GET /eventos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let eventos = EventRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Erro ao listar eventos"))?;
    Ok(Json(eventos))
}

/// POST /eventos
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<EventCreated>> {
    const CONTEXT: &str = "Erro ao criar evento";

    let mut input = CreateEvent::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome" => {
                input.nome = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "data" => {
                input.data = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao" => {
                input.descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "envolvidos" => {
                input.envolvidos = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "imagem" => {
                input.imagem =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    let evento = EventRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(EventCreated {
        message: "Evento criado!",
        evento,
    }))
}

/// PUT /eventos/{id}
///
/// `imagem` is only overwritten when a new file is attached.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    const CONTEXT: &str = "Erro ao atualizar evento";

    let mut input = UpdateEvent::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nome" => {
                input.nome = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "data" => {
                input.data = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "descricao" => {
                input.descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "envolvidos" => {
                input.envolvidos = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "imagem" => {
                input.imagem =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    EventRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(MessageResponse {
        message: "Evento atualizado!",
    }))
}

/// DELETE /eventos/{id}
///
/// Hard delete; fails with the 400 envelope while gallery images still
/// reference the event.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    EventRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Erro ao deletar evento"))?;

    Ok(Json(MessageResponse {
        message: "Evento deletado!",
    }))
}

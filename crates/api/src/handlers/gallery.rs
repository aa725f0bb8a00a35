//! Handlers for the `/galeria_eventos` resource.
//!
//! The gallery is the one resource whose image is mandatory: creation without
//! an attached `imagem` file is rejected before any store call.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use eventos_core::error::CoreError;
use eventos_core::types::DbId;
use eventos_db::models::gallery_image::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};
use eventos_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::upload;

/// Response for `POST /galeria_eventos`.
#[derive(Debug, Serialize)]
pub struct GalleryImageCreated {
    pub message: &'static str,
    pub imagem: GalleryImage,
}

/// GET /galeria_eventos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryImage>>> {
    let imagens = GalleryRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Erro ao listar imagens"))?;
    Ok(Json(imagens))
}

/// POST /galeria_eventos
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<GalleryImageCreated>> {
    const CONTEXT: &str = "Erro ao adicionar imagem";

    let mut url_imagem: Option<String> = None;
    let mut descricao: Option<String> = None;
    let mut evento_id: Option<DbId> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "descricao" => {
                descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "evento_id" => {
                let text = field.text().await.map_err(AppError::op(CONTEXT))?;
                evento_id = Some(text.parse::<DbId>().map_err(AppError::op(CONTEXT))?);
            }
            "imagem" => {
                url_imagem =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    let url_imagem = url_imagem
        .ok_or_else(|| AppError::Core(CoreError::Validation("Imagem obrigatória!".into())))?;

    let imagem = GalleryRepo::create(
        &state.pool,
        &CreateGalleryImage {
            url_imagem,
            descricao,
            evento_id,
        },
    )
    .await
    .map_err(AppError::op(CONTEXT))?;

    Ok(Json(GalleryImageCreated {
        message: "Imagem adicionada à galeria do evento!",
        imagem,
    }))
}

/// PUT /galeria_eventos/{id}
///
/// `url_imagem` is only overwritten when a new file is attached.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    const CONTEXT: &str = "Erro ao atualizar imagem";

    let mut input = UpdateGalleryImage::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(AppError::op(CONTEXT))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "descricao" => {
                input.descricao = Some(field.text().await.map_err(AppError::op(CONTEXT))?);
            }
            "evento_id" => {
                let text = field.text().await.map_err(AppError::op(CONTEXT))?;
                input.evento_id = Some(text.parse::<DbId>().map_err(AppError::op(CONTEXT))?);
            }
            "imagem" => {
                input.url_imagem =
                    Some(upload::store_file(&state.config.upload_dir, field, CONTEXT).await?);
            }
            _ => {}
        }
    }

    GalleryRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::op(CONTEXT))?;

    Ok(Json(MessageResponse {
        message: "Imagem da galeria do evento atualizada!",
    }))
}

/// DELETE /galeria_eventos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    GalleryRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Erro ao deletar imagem"))?;

    Ok(Json(MessageResponse {
        message: "Imagem da galeria do evento deletada!",
    }))
}

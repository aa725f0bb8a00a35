//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use eventos_core::types::DbId;
use eventos_db::models::user::{CreateUser, UpdateUser, User};
use eventos_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Request body for `PUT /users/{id}`. Absent fields are left untouched;
/// `senha` is re-hashed only when supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Response for `POST /users`.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: &'static str,
    pub user: User,
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool)
        .await
        .map_err(AppError::op("Erro ao listar usuários"))?;
    Ok(Json(users))
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<Json<UserCreated>> {
    const CONTEXT: &str = "Erro ao criar usuário";

    let hash = hash_password(&input.senha).map_err(AppError::op(CONTEXT))?;
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            nome: input.nome,
            email: input.email,
            senha: hash,
        },
    )
    .await
    .map_err(AppError::op(CONTEXT))?;

    Ok(Json(UserCreated {
        message: "Usuário criado!",
        user,
    }))
}

/// PUT /users/{id}
///
/// Returns the success message whether or not a row matched, like the rest of
/// the update handlers.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    const CONTEXT: &str = "Erro ao atualizar usuário";

    let senha = match input.senha.as_deref() {
        Some(plain) => Some(hash_password(plain).map_err(AppError::op(CONTEXT))?),
        None => None,
    };

    UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            nome: input.nome,
            email: input.email,
            senha,
        },
    )
    .await
    .map_err(AppError::op(CONTEXT))?;

    Ok(Json(MessageResponse {
        message: "Usuário atualizado!",
    }))
}

/// DELETE /users/{id}
///
/// Hard delete; deleting a nonexistent id reports the same success message.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    UserRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::op("Erro ao deletar usuário"))?;

    Ok(Json(MessageResponse {
        message: "Usuário deletado!",
    }))
}

//! Handlers for registration (`/cadastro`) and login (`/login`).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use eventos_core::error::CoreError;
use eventos_db::models::user::{CreateUser, User};
use eventos_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Login failures use one message for both unknown email and wrong password,
/// so responses cannot be used to enumerate registered emails.
const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /cadastro`.
#[derive(Debug, Deserialize)]
pub struct CadastroRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Response for `POST /cadastro`.
#[derive(Debug, Serialize)]
pub struct CadastroResponse {
    pub message: &'static str,
    pub user: User,
}

/// Response for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /cadastro
///
/// Hash the password and insert the user. A duplicate email trips the unique
/// constraint and comes back as the standard 400 envelope.
pub async fn cadastro(
    State(state): State<AppState>,
    Json(input): Json<CadastroRequest>,
) -> AppResult<Json<CadastroResponse>> {
    const CONTEXT: &str = "Erro ao cadastrar usuário";

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

    Ok(Json(CadastroResponse {
        message: "Usuário cadastrado!",
        user,
    }))
}

/// POST /login
///
/// Look up by email and compare against the stored bcrypt hash. Unknown email
/// and wrong password fail identically with 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    const CONTEXT: &str = "Erro ao fazer login";

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await
        .map_err(AppError::op(CONTEXT))?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let matches = verify_password(&input.senha, &user.senha).map_err(AppError::op(CONTEXT))?;
    if !matches {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    Ok(Json(LoginResponse {
        message: "Login realizado com sucesso!",
        user,
    }))
}

//! User entity model and DTOs.

use eventos_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// `senha` holds the bcrypt hash. The full row, hash included, is what the
/// existing API contract returns to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// DTO for inserting a user. `senha` must already be hashed by the caller.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// DTO for updating a user. Only non-`None` fields are applied; `senha`, when
/// present, must already be hashed.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

//! Route definitions for registration and login.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /cadastro -> cadastro
/// POST /login    -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cadastro", post(auth::cadastro))
        .route("/login", post(auth::login))
}

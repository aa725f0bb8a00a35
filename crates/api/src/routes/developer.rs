//! Route definitions for the `/desenvolvedores` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::developer;
use crate::state::AppState;

/// Routes mounted at `/desenvolvedores`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (multipart)
/// PUT    /{id}  -> update (multipart)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(developer::list).post(developer::create))
        .route("/{id}", put(developer::update).delete(developer::delete))
}

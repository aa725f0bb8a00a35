//! Route definitions for the `/galeria_eventos` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/galeria_eventos`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (multipart, image required)
/// PUT    /{id}  -> update (multipart)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/{id}", put(gallery::update).delete(gallery::delete))
}

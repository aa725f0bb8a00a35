//! Route definitions for the `/eventos` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/eventos`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (multipart)
/// PUT    /{id}  -> update (multipart)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/{id}", put(event::update).delete(event::delete))
}

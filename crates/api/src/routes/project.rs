//! Route definitions for the `/projetos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projetos`.
///
/// GET on `/{id}` serves the full list: the legacy frontend requests the
/// collection through that path, so both GET routes share the handler.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (multipart)
/// GET    /{id}  -> list
/// PUT    /{id}  -> update (multipart)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::list)
                .put(project::update)
                .delete(project::delete),
        )
}

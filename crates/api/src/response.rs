//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` envelope returned by update and delete
/// handlers. Creates use per-entity envelopes defined in their handler
/// modules, since each names its payload key differently (`user`, `dev`,
/// `projeto`, `evento`, `imagem`).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

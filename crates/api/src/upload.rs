//! Persistence of multipart file uploads.
//!
//! Each file-bearing resource accepts a single named file field. The file is
//! written under the configured upload directory with a UUIDv4 name plus the
//! original extension, and the returned value is the public path served by the
//! `/uploads` static route. That public path is what gets stored in the
//! entity's photo/image column.

use std::path::Path;

use axum::extract::multipart::Field;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// URL prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "uploads";

/// Read an uploaded multipart field to completion and write it into `dir`.
///
/// Returns the public path (`uploads/<uuid>.<ext>`). Failures are wrapped in
/// the caller's operation context so they surface as the standard 400
/// envelope.
pub async fn store_file(
    dir: &Path,
    field: Field<'_>,
    context: &'static str,
) -> AppResult<String> {
    let original = field.file_name().unwrap_or_default().to_string();
    let ext = Path::new(&original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let data = field.bytes().await.map_err(AppError::op(context))?;

    let name = format!("{}{ext}", Uuid::new_v4());
    tokio::fs::write(dir.join(&name), &data)
        .await
        .map_err(AppError::op(context))?;

    Ok(format!("{PUBLIC_PREFIX}/{name}"))
}

//! Upload handler.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::AppState;
use crate::file::{StoredFile, UploadStore};
use crate::web::dto::{MessageResponse, UploadResponse, UploadedFile};
use crate::web::error::ApiError;
use crate::FiledropError;

/// Multipart field carrying the uploaded files.
pub const FILES_FIELD: &str = "files";

/// Message returned when a request carries no file parts.
pub const NO_FILES_MESSAGE: &str = "No files uploaded";

/// Extra body allowance per file for multipart boundaries and part headers.
const MULTIPART_OVERHEAD_PER_FILE: u64 = 64 * 1024;

/// Request body limit for the upload route.
pub fn upload_body_limit(max_files: usize, max_file_size: u64) -> usize {
    let per_file = max_file_size.saturating_add(MULTIPART_OVERHEAD_PER_FILE);
    let total = (max_files as u64).saturating_mul(per_file);
    usize::try_from(total).unwrap_or(usize::MAX)
}

/// POST /upload - Store the files of a multipart request.
///
/// Request body: multipart/form-data with one or more `files` parts. Parts
/// without a filename, and parts on other fields, are ignored.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "Uploads",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "One or more file parts under the `files` field"
    ),
    responses(
        (status = 200, description = "Files stored", body = UploadResponse),
        (status = 400, description = "No files, too many files, or malformed multipart data", body = MessageResponse),
        (status = 413, description = "A file exceeds the size limit", body = MessageResponse),
        (status = 500, description = "Failed to write to the upload directory", body = MessageResponse)
    )
)]
pub async fn upload_files(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Rejected non-multipart upload: {}", e);
        ApiError::bad_request(NO_FILES_MESSAGE)
    })?;

    let mut stored = Vec::new();
    if let Err(e) = receive_files(&state, &mut multipart, &mut stored).await {
        discard(&state.store, &stored).await;
        return Err(e);
    }

    if stored.is_empty() {
        return Err(ApiError::bad_request(NO_FILES_MESSAGE));
    }

    let names: Vec<&str> = stored.iter().map(|f| f.name.as_str()).collect();
    tracing::info!(count = stored.len(), files = ?names, "Stored upload");

    let files = stored.into_iter().map(UploadedFile::from).collect();
    Ok(Json(UploadResponse::new(files)))
}

/// Stream every file part of `multipart` to disk, pushing each finished file
/// onto `stored`.
async fn receive_files(
    state: &AppState,
    multipart: &mut Multipart,
    stored: &mut Vec<StoredFile>,
) -> Result<(), ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let Some(original) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            continue;
        };

        if stored.len() >= state.max_files {
            return Err(ApiError::bad_request(format!(
                "Too many files (max {})",
                state.max_files
            )));
        }

        stored.push(save_field(state, field, &original).await?);
    }

    Ok(())
}

async fn save_field(
    state: &AppState,
    mut field: Field<'_>,
    original: &str,
) -> Result<StoredFile, ApiError> {
    let mut writer = state
        .store
        .create(original, state.max_file_size)
        .await
        .map_err(save_error)?;

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                writer.abort().await;
                return Err(multipart_error(e));
            }
        };

        if let Err(e) = writer.write_chunk(&chunk).await {
            writer.abort().await;
            return Err(save_error(e));
        }
    }

    tracing::debug!(
        file = %writer.stored().name,
        bytes = writer.written(),
        "Received file"
    );
    writer.finish().await.map_err(save_error)
}

/// Remove files already written by a failed request.
async fn discard(store: &UploadStore, stored: &[StoredFile]) {
    for file in stored {
        if let Err(e) = store.remove(&file.name).await {
            tracing::warn!(file = %file.name, error = %e, "Failed to remove file of failed upload");
        }
    }
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload exceeded the request body limit: {}", err);
        return ApiError::payload_too_large("Request body too large");
    }

    tracing::error!("Failed to read multipart field: {}", err);
    ApiError::bad_request("Invalid multipart data")
}

fn save_error(err: FiledropError) -> ApiError {
    match err {
        FiledropError::TooLarge(_) => err.into(),
        _ => {
            tracing::error!("Failed to save file: {}", err);
            ApiError::internal("Failed to save file")
        }
    }
}

//! Response DTOs for the Filedrop web layer.

use serde::Serialize;
use utoipa::ToSchema;

use crate::file::StoredFile;

/// Plain message body, used for errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One file stored by an upload request.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadedFile {
    /// Stored filename (`<millis>-<original>`).
    pub filename: String,
    /// Absolute location on disk.
    pub path: String,
    /// Public URL.
    pub url: String,
}

impl From<StoredFile> for UploadedFile {
    fn from(file: StoredFile) -> Self {
        Self {
            filename: file.name,
            path: file.path.to_string_lossy().into_owned(),
            url: file.url,
        }
    }
}

/// Upload response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Summary, e.g. "Successfully uploaded 2 file(s)!".
    pub message: String,
    /// Stored files in upload order.
    pub files: Vec<UploadedFile>,
}

impl UploadResponse {
    /// Build the response for a completed upload.
    pub fn new(files: Vec<UploadedFile>) -> Self {
        Self {
            message: format!("Successfully uploaded {} file(s)!", files.len()),
            files,
        }
    }
}

/// Entry of the upload listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadListEntry {
    /// Directory entry name.
    pub name: String,
    /// Public URL.
    pub url: String,
}

impl From<StoredFile> for UploadListEntry {
    fn from(file: StoredFile) -> Self {
        Self {
            name: file.name,
            url: file.url,
        }
    }
}

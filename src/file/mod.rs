//! Upload storage module for Filedrop.
//!
//! This module owns the upload directory:
//! - Stored-name derivation (`<epoch-millis>-<original-name>`)
//! - Client filename sanitizing
//! - Streaming writes with a per-file size limit
//! - Directory listing

mod name;
mod storage;

pub use name::{public_url, sanitize_file_name, stored_name, FALLBACK_FILE_NAME, UPLOADS_URL_PREFIX};
pub use storage::{FileWriter, StoredFile, UploadStore};

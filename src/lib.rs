//! Filedrop - a minimal multipart file upload server.
//!
//! Uploaded files are stored on local disk as `<epoch-millis>-<original-name>`
//! and can be listed as JSON, browsed as an HTML page, and fetched back under
//! `/uploads/`. Any other path falls back to the bundled frontend.

pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod web;

pub use config::Config;
pub use error::{FiledropError, Result};
pub use file::{StoredFile, UploadStore};
pub use web::WebServer;

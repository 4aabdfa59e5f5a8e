//! API handlers for the Filedrop web layer.

pub mod health;
pub mod listing;
pub mod upload;

pub use health::*;
pub use listing::*;
pub use upload::*;

use crate::config::UploadsConfig;
use crate::file::UploadStore;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upload directory.
    pub store: UploadStore,
    /// Maximum number of files per upload request.
    pub max_files: usize,
    /// Maximum size of a single file in bytes.
    pub max_file_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: UploadStore, max_files: usize, max_file_size: u64) -> Self {
        Self {
            store,
            max_files,
            max_file_size,
        }
    }

    /// Open the configured upload directory and build the state around it.
    pub fn from_config(config: &UploadsConfig) -> crate::Result<Self> {
        let store = UploadStore::new(&config.dir)?;
        Ok(Self::new(store, config.max_files, config.max_file_size))
    }
}

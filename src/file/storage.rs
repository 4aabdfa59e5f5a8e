//! Upload directory storage for Filedrop.
//!
//! Files are stored flat in a single directory:
//! ```text
//! {base_path}/
//! ├── 1700000000123-report.pdf
//! ├── 1700000004567-a.txt
//! └── ...
//! ```
//! The directory is the only source of truth. Nothing is cached in memory,
//! so every listing re-reads it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::name::{public_url, stored_name};
use crate::{FiledropError, Result};

/// A file in the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Stored filename (`<millis>-<original>` for files created by uploads).
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
    /// Public URL under `/uploads`.
    pub url: String,
}

/// Upload directory handle.
#[derive(Debug, Clone)]
pub struct UploadStore {
    /// Directory holding uploaded files.
    base_path: PathBuf,
}

impl UploadStore {
    /// Open the upload directory, creating it if it doesn't exist.
    ///
    /// The stored base path is absolute, so reported file paths are too.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;
        let base_path = fs::canonicalize(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the full file path for a stored name.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Describe the entry `name` without touching the disk.
    pub fn describe(&self, name: &str) -> StoredFile {
        StoredFile {
            name: name.to_string(),
            path: self.file_path(name),
            url: public_url(name),
        }
    }

    /// Create a new stored file for a client upload named `original_name`.
    ///
    /// The stored name is derived from the current time in milliseconds. An
    /// existing file with the same name is truncated.
    pub async fn create(&self, original_name: &str, max_size: u64) -> Result<FileWriter> {
        let millis = chrono::Utc::now().timestamp_millis();
        self.create_named(&stored_name(millis, original_name), max_size)
            .await
    }

    /// Create a stored file with an already derived name.
    pub async fn create_named(&self, name: &str, max_size: u64) -> Result<FileWriter> {
        let stored = self.describe(name);
        let file = File::create(&stored.path).await?;

        Ok(FileWriter {
            file,
            stored,
            written: 0,
            max_size,
        })
    }

    /// Remove a stored file.
    ///
    /// Returns `true` if the file was deleted, `false` if it didn't exist.
    pub async fn remove(&self, name: &str) -> Result<bool> {
        match tokio::fs::remove_file(self.file_path(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// List every entry of the upload directory, sorted by name.
    ///
    /// Subdirectories and files not created by uploads are listed too.
    pub async fn list(&self) -> Result<Vec<StoredFile>> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names.iter().map(|name| self.describe(name)).collect())
    }
}

/// Streaming writer for one stored file, enforcing the per-file size limit.
#[derive(Debug)]
pub struct FileWriter {
    file: File,
    stored: StoredFile,
    written: u64,
    max_size: u64,
}

impl FileWriter {
    /// The file being written.
    pub fn stored(&self) -> &StoredFile {
        &self.stored
    }

    /// Number of bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Append a chunk.
    ///
    /// Fails with [`FiledropError::TooLarge`] before writing anything past
    /// the limit.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let total = self.written.saturating_add(chunk.len() as u64);
        if total > self.max_size {
            return Err(FiledropError::TooLarge(self.max_size));
        }

        self.file.write_all(chunk).await?;
        self.written = total;
        Ok(())
    }

    /// Flush the file and return its description.
    pub async fn finish(mut self) -> Result<StoredFile> {
        self.file.flush().await?;
        Ok(self.stored)
    }

    /// Close and delete the partially written file.
    pub async fn abort(self) {
        let path = self.stored.path.clone();
        drop(self.file);

        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial upload");
            }
        }
    }
}

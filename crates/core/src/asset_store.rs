//! Write-once storage for uploaded profile images.
//!
//! Assets are addressed by a generated key (`<uuid>.<ext>`), never by the
//! uploader's filename, so two uploads can never overwrite each other.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CoreError;

/// Longest file extension carried over from the uploaded filename.
pub const MAX_EXTENSION_LENGTH: usize = 8;

/// Storage backend for uploaded assets.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist `bytes` and return the key the asset is stored under.
    ///
    /// `original_name` only contributes its extension to the key.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, CoreError>;

    /// Delete a previously stored asset. Missing assets are not an error.
    async fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Build a fresh asset key for an uploaded file.
pub fn asset_key(original_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match sanitized_extension(original_name) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Lowercased extension of `name`, or `None` if it is absent or unsafe.
fn sanitized_extension(name: &str) -> Option<String> {
    let basename = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let (stem, ext) = basename.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LENGTH
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether `key` could have been produced by [`asset_key`].
///
/// Guards [`AssetStore::remove`] against path traversal.
pub fn is_valid_key(key: &str) -> bool {
    let (id, ext) = match key.split_once('.') {
        Some((id, ext)) => (id, Some(ext)),
        None => (key, None),
    };
    uuid::Uuid::parse_str(id).is_ok()
        && match ext {
            None => true,
            Some(e) => {
                !e.is_empty()
                    && e.len() <= MAX_EXTENSION_LENGTH
                    && e.chars().all(|c| c.is_ascii_alphanumeric())
            }
        }
}

// ---------------------------------------------------------------------------
// Local filesystem backend
// ---------------------------------------------------------------------------

/// Stores assets as flat files inside one public directory.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the assets are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the asset directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            CoreError::Internal(format!(
                "Failed to create asset directory {}: {e}",
                self.root.display()
            ))
        })
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, CoreError> {
        let key = asset_key(original_name);
        let dest = self.root.join(&key);
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write asset {key}: {e}")))?;
        tracing::debug!(asset_key = %key, size = bytes.len(), "Asset stored");
        Ok(key)
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        if !is_valid_key(key) {
            return Err(CoreError::Validation(format!("Invalid asset key '{key}'")));
        }
        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Internal(format!(
                "Failed to remove asset {key}: {e}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Local file storage for order uploads
//!
//! Files land at `<upload_dir>/orders/<order_id>/<kind>.<ext>`. Writes go to a
//! temporary file first and are renamed into place.

use std::path::{Path, PathBuf};

use card_common::{AppError, StorageConfig};
use tracing::{debug, info};
use uuid::Uuid;

/// Extension used when the client sends none we accept
const FALLBACK_EXTENSION: &str = "bin";
const MAX_EXTENSION_LEN: usize = 8;

/// Which order file is being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Logo,
    Design,
}

impl UploadKind {
    /// Parse a multipart field name
    pub fn from_field(name: &str) -> Option<Self> {
        match name {
            "logo" => Some(Self::Logo),
            "design" => Some(Self::Design),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Design => "design",
        }
    }
}

/// Filesystem-backed upload storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    max_file_size: usize,
}

impl FileStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.upload_dir.clone(),
            max_file_size: config.max_file_size_bytes(),
        }
    }

    /// Largest accepted file, in bytes
    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Directory holding an order's files
    pub fn order_dir(&self, order_id: Uuid) -> PathBuf {
        self.root.join("orders").join(order_id.to_string())
    }

    /// Final path of an uploaded order file
    pub fn order_file_path(
        &self,
        order_id: Uuid,
        kind: UploadKind,
        original_name: Option<&str>,
    ) -> PathBuf {
        self.order_dir(order_id)
            .join(format!("{}.{}", kind.as_str(), extension_of(original_name)))
    }

    /// Store one order file, replacing any previous file of the same name
    pub async fn save_order_file(
        &self,
        order_id: Uuid,
        kind: UploadKind,
        original_name: Option<&str>,
        data: &[u8],
    ) -> Result<PathBuf, AppError> {
        if data.len() > self.max_file_size {
            return Err(AppError::PayloadTooLarge(format!(
                "{} exceeds {} bytes",
                kind.as_str(),
                self.max_file_size
            )));
        }

        let dir = self.order_dir(order_id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("failed to create {}: {e}", dir.display())))?;

        let path = self.order_file_path(order_id, kind, original_name);
        let tmp_path = dir.join(format!(".{}.{}.tmp", kind.as_str(), Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&tmp_path, data).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(AppError::Storage(format!("failed to write upload: {e}")));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(AppError::Storage(format!("failed to store upload: {e}")));
        }

        info!(%order_id, kind = kind.as_str(), bytes = data.len(), "Order file stored");
        debug!(path = %path.display(), "Upload path");

        Ok(path)
    }
}

/// Lower-cased alphanumeric extension of a client file name
fn extension_of(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.bytes().all(|b| b.is_ascii_alphanumeric())
        })
        .map_or_else(|| FALLBACK_EXTENSION.to_string(), str::to_ascii_lowercase)
}

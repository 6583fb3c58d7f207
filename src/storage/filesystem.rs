use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::{ObjectStore, UploadOptions, validate_object_path};
use crate::common::StorageError;

/// Stores objects as plain files under `{root}/{bucket}/{path}`.
///
/// Public URLs are `{public_base}/{bucket}/{path}`; the web server is
/// expected to serve `root` at `public_base`.
pub struct FilesystemStorage {
    root: PathBuf,
    public_base: String,
}

impl FilesystemStorage {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn full_path(&self, bucket: &str, path: &str) -> PathBuf {
        self.root.join(bucket).join(path)
    }
}

#[async_trait]
impl ObjectStore for FilesystemStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        _content_type: &str,
        options: UploadOptions,
    ) -> Result<(), StorageError> {
        validate_object_path(bucket, path)?;

        let full_path = self.full_path(bucket, path);
        debug!(full_path = %full_path.display(), size = bytes.len(), "storage: write");

        if !options.overwrite && fs::try_exists(&full_path).await? {
            return Err(StorageError::Rejected {
                status: 409,
                message: "The resource already exists".to_string(),
            });
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write beside the target and rename so readers never see a partial file.
        let mut tmp_path = full_path.clone().into_os_string();
        tmp_path.push(".part");
        let tmp_path = PathBuf::from(tmp_path);
        fs::write(&tmp_path, bytes).await?;
        if let Err(e) = fs::rename(&tmp_path, &full_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> Result<String, StorageError> {
        validate_object_path(bucket, path)?;
        Ok(format!("{}/{}/{}", self.public_base, bucket, path))
    }
}

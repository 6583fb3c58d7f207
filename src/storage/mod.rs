//! Object storage collaborators for uploaded site assets.
//!
//! Two backends are available: [`SupabaseStorage`] talks to a
//! Supabase-compatible storage REST API, and [`FilesystemStorage`] keeps
//! objects in a local directory that the web server exposes under a public
//! prefix.

use async_trait::async_trait;

use crate::common::StorageError;

pub use filesystem::FilesystemStorage;
pub use supabase::SupabaseStorage;

mod filesystem;
mod supabase;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Replace an existing object at the same path instead of failing.
    pub overwrite: bool,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        content_type: &str,
        options: UploadOptions,
    ) -> Result<(), StorageError>;

    /// Publicly fetchable URL of an object. Does not check that it exists.
    fn public_url(&self, bucket: &str, path: &str) -> Result<String, StorageError>;
}

/// Reject paths that could escape the bucket.
pub(crate) fn validate_object_path(bucket: &str, path: &str) -> Result<(), StorageError> {
    let bad = |what: &str| Err(StorageError::InvalidPath(what.to_string()));

    if bucket.is_empty() || bucket.contains(['/', '\\']) || bucket == ".." {
        return bad(bucket);
    }
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return bad(path);
    }
    if path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return bad(path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_paths() {
        assert!(validate_object_path("assets", "logos/logo-1.png").is_ok());
    }

    #[test]
    fn rejects_traversal_and_absolute_paths() {
        for path in ["", "/etc/passwd", "logos/../../x", "logos//x", "a\\b", "./x"] {
            assert!(
                validate_object_path("assets", path).is_err(),
                "{path:?} should be rejected"
            );
        }
        assert!(validate_object_path("as/sets", "x.png").is_err());
    }
}

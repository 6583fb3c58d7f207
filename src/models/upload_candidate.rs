use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};

use crate::common::LogoError;

/// Largest accepted logo, inclusive.
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// Logical bucket holding site assets.
pub const LOGO_BUCKET: &str = "assets";

/// Object prefix for logos inside [`LOGO_BUCKET`].
pub const LOGO_PREFIX: &str = "logos";

/// A file the user picked on the settings page, not yet stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadCandidate {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn validate(&self) -> Result<(), LogoError> {
        if !self
            .content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
        {
            return Err(LogoError::NotAnImage);
        }

        if self.size() > MAX_LOGO_BYTES {
            return Err(LogoError::TooLarge);
        }

        Ok(())
    }

    /// Inline `data:` URI used to show the image before the store answers.
    pub fn preview_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type.trim(),
            STANDARD.encode(&self.bytes)
        )
    }

    /// Extension used in the object key.
    ///
    /// The leading ASCII alphanumerics after the last `.` of the file name (the
    /// whole name when it has no dot). When that is empty, the MIME subtype is
    /// used the same way, and `bin` after that.
    pub fn extension(&self) -> &str {
        let from_name = leading_alnum(self.file_name.rsplit('.').next().unwrap_or_default());
        if !from_name.is_empty() {
            return from_name;
        }

        let subtype = self.content_type.trim().split_once('/').map(|(_, s)| s);
        match subtype.map(leading_alnum) {
            Some(ext) if !ext.is_empty() => ext,
            _ => "bin",
        }
    }

    pub fn object_path(&self, now: DateTime<Utc>) -> String {
        format!(
            "{}/logo-{}.{}",
            LOGO_PREFIX,
            now.timestamp_millis(),
            self.extension()
        )
    }
}

fn leading_alnum(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    &s[..end]
}

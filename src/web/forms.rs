use actix_multipart::Multipart;
use futures_util::StreamExt;
use serde::Deserialize;

use dsatmath::models::{MAX_LOGO_BYTES, UploadCandidate};

/// Form field carrying the logo file.
pub const LOGO_FIELD: &str = "logo";

#[derive(Deserialize, Default)]
pub struct NavQuery {
    pub menu: Option<String>,
}

impl NavQuery {
    pub fn menu_open(&self) -> bool {
        self.menu.as_deref().is_some_and(|m| m == "open")
    }
}

/// Pull the logo file out of a multipart upload.
///
/// Buffers at most one byte past [`MAX_LOGO_BYTES`] so an oversized file is
/// still recognised as such; the rest of it is read and dropped. Returns
/// `None` when the form was submitted without a file.
pub async fn read_logo_upload(
    mut payload: Multipart,
) -> Result<Option<UploadCandidate>, actix_multipart::MultipartError> {
    let mut candidate = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;

        let is_logo = field.name() == Some(LOGO_FIELD);
        if !is_logo || candidate.is_some() {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            let room = (MAX_LOGO_BYTES + 1).saturating_sub(bytes.len());
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
        }

        if file_name.is_empty() && bytes.is_empty() {
            continue;
        }

        candidate = Some(UploadCandidate::new(file_name, content_type, bytes));
    }

    Ok(candidate)
}

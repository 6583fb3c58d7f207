/// What the settings page shows in the logo slot.
///
/// A preview and a persisted URL are never shown together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogoDisplay {
    #[default]
    Unset,
    /// Local `data:` URI of a file that has not been confirmed by the store.
    Previewing(String),
    /// URL confirmed by the settings store.
    Persisted(String),
}

impl LogoDisplay {
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Previewing(uri) | Self::Persisted(uri) => Some(uri),
        }
    }

    pub fn persisted_url(&self) -> Option<&str> {
        match self {
            Self::Persisted(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Previewing(_))
    }
}

/// Lifecycle of one upload attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    PreviewReady,
    Uploading,
    Persisted,
    Failed,
}

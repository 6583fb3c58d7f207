use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be set when STORAGE_BACKEND={backend}")]
    MissingVar {
        var: &'static str,
        backend: &'static str,
    },

    #[error("unknown STORAGE_BACKEND {0:?} (expected `supabase` or `filesystem`)")]
    UnknownBackend(String),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage service answered but refused the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid object path: {0}")]
    InvalidPath(String),
}

#[derive(Error, Debug)]
pub enum SettingsStoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The store refused the write, e.g. a policy violation.
    #[error("{0}")]
    Rejected(String),
}

/// Everything the logo settings flow can report back to the page.
///
/// The `Display` text is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogoError {
    #[error("Please select an image file")]
    NotAnImage,

    #[error("File size must be less than 5MB")]
    TooLarge,

    #[error("Database not configured")]
    NotConfigured,

    #[error("Another logo update is already in progress")]
    Busy,

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Update(String),
}

impl LogoError {
    pub const UPLOAD_FALLBACK: &'static str = "Failed to upload logo";
    pub const REMOVE_FALLBACK: &'static str = "Failed to remove logo";

    /// Wrap a collaborator failure, keeping its message unless it is blank.
    pub fn upload(err: impl std::fmt::Display) -> Self {
        Self::Upload(message_or(err, Self::UPLOAD_FALLBACK))
    }

    pub fn update(err: impl std::fmt::Display) -> Self {
        Self::Update(message_or(err, Self::REMOVE_FALLBACK))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NotAnImage | Self::TooLarge)
    }
}

fn message_or(err: impl std::fmt::Display, fallback: &str) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primary key of the one and only settings row.
pub const SETTINGS_ID: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LogoSetting {
    pub id: i32,
    pub logo_url: Option<String>,
}

impl LogoSetting {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            id: SETTINGS_ID,
            logo_url: Some(url.into()),
        }
    }

    pub fn cleared() -> Self {
        Self {
            id: SETTINGS_ID,
            logo_url: None,
        }
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::SettingsStoreError;
use crate::models::LogoSetting;

/// Key-value persistence for the single site settings row.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when the row has never been written.
    async fn get_settings(&self) -> Result<Option<LogoSetting>, SettingsStoreError>;

    async fn upsert_settings(&self, setting: &LogoSetting) -> Result<(), SettingsStoreError>;

    /// Set `logo_url` to NULL. Succeeds even when the row does not exist.
    async fn clear_logo(&self, id: i32) -> Result<(), SettingsStoreError>;
}

pub async fn get_settings(pool: &PgPool, id: i32) -> Result<Option<LogoSetting>, sqlx::Error> {
    sqlx::query_as::<_, LogoSetting>(
        r#"
        SELECT id, logo_url
        FROM settings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn upsert_settings(pool: &PgPool, data: &LogoSetting) -> Result<LogoSetting, sqlx::Error> {
    sqlx::query_as::<_, LogoSetting>(
        r#"
        INSERT INTO settings (id, logo_url)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE
        SET
            logo_url = EXCLUDED.logo_url,
            updated_at = now()
        RETURNING id, logo_url
        "#,
    )
    .bind(data.id)
    .bind(data.logo_url.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn clear_logo(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE settings
        SET
            logo_url = NULL,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub struct PgSettingsStore {
    pool: PgPool,
    id: i32,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            id: crate::models::SETTINGS_ID,
        }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get_settings(&self) -> Result<Option<LogoSetting>, SettingsStoreError> {
        Ok(get_settings(&self.pool, self.id).await?)
    }

    async fn upsert_settings(&self, setting: &LogoSetting) -> Result<(), SettingsStoreError> {
        upsert_settings(&self.pool, setting).await?;
        Ok(())
    }

    async fn clear_logo(&self, id: i32) -> Result<(), SettingsStoreError> {
        clear_logo(&self.pool, id).await?;
        Ok(())
    }
}

//! Runtime configuration, read from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenvy`) so local setups can keep
//! everything in one place.
//!
//! | Variable             | Default         | Meaning                                   |
//! |----------------------|-----------------|-------------------------------------------|
//! | `BIND_ADDR`          | `0.0.0.0:8080`  | HTTP listen address                       |
//! | `DATABASE_URL`       | unset           | Postgres URL; unset disables settings     |
//! | `STORAGE_BACKEND`    | see below       | `supabase` or `filesystem`                |
//! | `SUPABASE_URL`       | unset           | Base URL of the storage API               |
//! | `SUPABASE_KEY`       | unset           | Service or anon key for the storage API   |
//! | `UPLOAD_DIR`         | `./uploads`     | Root directory for the filesystem backend |
//! | `UPLOAD_PUBLIC_BASE` | `/uploads`      | URL prefix the upload dir is served at    |
//! | `STATIC_DIR`         | `./static`      | Bundled images and stylesheets            |
//!
//! When `STORAGE_BACKEND` is unset, Supabase is used if both `SUPABASE_URL`
//! and `SUPABASE_KEY` are present; otherwise storage stays unconfigured and
//! uploads report "Database not configured".

use std::path::PathBuf;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Disabled,
    Supabase { url: String, key: String },
    Filesystem { dir: PathBuf, public_base: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub storage: StorageConfig,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let supabase = |backend: &'static str| -> Result<StorageConfig, ConfigError> {
            let url = get("SUPABASE_URL").ok_or(ConfigError::MissingVar {
                var: "SUPABASE_URL",
                backend,
            })?;
            let key = get("SUPABASE_KEY").ok_or(ConfigError::MissingVar {
                var: "SUPABASE_KEY",
                backend,
            })?;
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    var: "SUPABASE_URL",
                    reason: format!("{url:?} is not an http(s) URL"),
                });
            }
            Ok(StorageConfig::Supabase { url, key })
        };

        let storage = match get("STORAGE_BACKEND").map(|b| b.to_lowercase()) {
            Some(b) if b == "supabase" => supabase("supabase")?,
            Some(b) if b == "filesystem" || b == "fs" => StorageConfig::Filesystem {
                dir: get("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("./uploads")),
                public_base: get("UPLOAD_PUBLIC_BASE").unwrap_or_else(|| "/uploads".to_string()),
            },
            Some(b) if b == "none" || b == "disabled" => StorageConfig::Disabled,
            Some(other) => return Err(ConfigError::UnknownBackend(other)),
            None if get("SUPABASE_URL").is_some() && get("SUPABASE_KEY").is_some() => {
                supabase("supabase")?
            }
            None => StorageConfig::Disabled,
        };

        if let StorageConfig::Filesystem { public_base, .. } = &storage {
            if !(public_base.starts_with('/') || public_base.starts_with("http")) {
                return Err(ConfigError::Invalid {
                    var: "UPLOAD_PUBLIC_BASE",
                    reason: "must be an absolute path or URL".to_string(),
                });
            }
        }

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: get("DATABASE_URL"),
            storage,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
        })
    }

    /// Local directory and URL path to serve it at, when uploads live on disk
    /// behind this server.
    pub fn upload_mount(&self) -> Option<(String, PathBuf)> {
        match &self.storage {
            StorageConfig::Filesystem { dir, public_base } if public_base.starts_with('/') => {
                Some((public_base.trim_end_matches('/').to_string(), dir.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_leave_collaborators_unconfigured() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.storage, StorageConfig::Disabled);
        assert_eq!(cfg.upload_mount(), None);
    }

    #[test]
    fn supabase_is_picked_up_from_credentials() {
        let cfg = config(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_KEY", "anon"),
            ("DATABASE_URL", " postgres://localhost/site "),
        ])
        .unwrap();
        assert_eq!(
            cfg.storage,
            StorageConfig::Supabase {
                url: "https://demo.supabase.co".into(),
                key: "anon".into()
            }
        );
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/site"));
    }

    #[test]
    fn explicit_supabase_requires_key() {
        let err = config(&[
            ("STORAGE_BACKEND", "supabase"),
            ("SUPABASE_URL", "https://demo.supabase.co"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVar {
                var: "SUPABASE_KEY",
                backend: "supabase"
            }
        );
    }

    #[test]
    fn filesystem_backend_is_served_locally() {
        let cfg = config(&[("STORAGE_BACKEND", "filesystem"), ("UPLOAD_DIR", "/srv/up")]).unwrap();
        assert_eq!(
            cfg.upload_mount(),
            Some(("/uploads".to_string(), PathBuf::from("/srv/up")))
        );
    }

    #[test]
    fn unknown_backend_is_an_error() {
        assert_eq!(
            config(&[("STORAGE_BACKEND", "ftp")]).unwrap_err(),
            ConfigError::UnknownBackend("ftp".into())
        );
    }
}

//! In-memory collaborators for exercising the logo flow without a database
//! or a storage service.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

use crate::common::{SettingsStoreError, StorageError};
use crate::db::SettingsStore;
use crate::models::LogoSetting;
use crate::services::LogoService;
use crate::storage::{ObjectStore, UploadOptions};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_upload: Mutex<Option<String>>,
    fail_public_url: Mutex<Option<String>>,
    upload_calls: AtomicUsize,
    entered: Notify,
    hold: Mutex<Option<Arc<Notify>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_uploads_with(&self, message: impl Into<String>) {
        *lock(&self.fail_upload) = Some(message.into());
    }

    pub fn fail_public_url_with(&self, message: impl Into<String>) {
        *lock(&self.fail_public_url) = Some(message.into());
    }

    /// Park every upload until the returned handle is notified.
    pub fn hold_uploads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *lock(&self.hold) = Some(gate.clone());
        gate
    }

    /// Resolves once an upload has reached the store.
    pub async fn upload_started(&self) {
        self.entered.notified().await
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    /// Keys of every object written so far, as `bucket/path`.
    pub fn object_keys(&self) -> Vec<String> {
        lock(&self.objects).keys().cloned().collect()
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        lock(&self.objects).get(key).cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        _content_type: &str,
        options: UploadOptions,
    ) -> Result<(), StorageError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();

        let hold = lock(&self.hold).clone();
        if let Some(gate) = hold {
            gate.notified().await;
        }

        if let Some(message) = lock(&self.fail_upload).clone() {
            return Err(StorageError::Rejected {
                status: 400,
                message,
            });
        }

        let key = format!("{bucket}/{path}");
        let mut objects = lock(&self.objects);
        if !options.overwrite && objects.contains_key(&key) {
            return Err(StorageError::Rejected {
                status: 409,
                message: "The resource already exists".into(),
            });
        }
        objects.insert(key, bytes.to_vec());
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> Result<String, StorageError> {
        if let Some(message) = lock(&self.fail_public_url).clone() {
            return Err(StorageError::Rejected {
                status: 500,
                message,
            });
        }
        Ok(format!("https://cdn.test/{bucket}/{path}"))
    }
}

#[derive(Default)]
pub struct MemorySettingsStore {
    row: Mutex<Option<LogoSetting>>,
    fail_get: Mutex<Option<String>>,
    fail_upsert: Mutex<Option<String>>,
    fail_clear: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySettingsStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_logo(url: impl Into<String>) -> Arc<Self> {
        let store = Self::default();
        *lock(&store.row) = Some(LogoSetting::with_url(url));
        Arc::new(store)
    }

    pub fn row(&self) -> Option<LogoSetting> {
        lock(&self.row).clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_get_with(&self, message: impl Into<String>) {
        *lock(&self.fail_get) = Some(message.into());
    }

    pub fn fail_upsert_with(&self, message: impl Into<String>) {
        *lock(&self.fail_upsert) = Some(message.into());
    }

    pub fn fail_clear_with(&self, message: impl Into<String>) {
        *lock(&self.fail_clear) = Some(message.into());
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_settings(&self) -> Result<Option<LogoSetting>, SettingsStoreError> {
        if let Some(message) = lock(&self.fail_get).clone() {
            return Err(SettingsStoreError::Rejected(message));
        }
        Ok(self.row())
    }

    async fn upsert_settings(&self, setting: &LogoSetting) -> Result<(), SettingsStoreError> {
        if let Some(message) = lock(&self.fail_upsert).clone() {
            return Err(SettingsStoreError::Rejected(message));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        *lock(&self.row) = Some(setting.clone());
        Ok(())
    }

    async fn clear_logo(&self, id: i32) -> Result<(), SettingsStoreError> {
        if let Some(message) = lock(&self.fail_clear).clone() {
            return Err(SettingsStoreError::Rejected(message));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(row) = lock(&self.row).as_mut().filter(|r| r.id == id) {
            row.logo_url = None;
        }
        Ok(())
    }
}

/// A service wired to fresh in-memory collaborators.
pub fn memory_service() -> (LogoService, Arc<MemoryObjectStore>, Arc<MemorySettingsStore>) {
    let storage = MemoryObjectStore::new();
    let settings = MemorySettingsStore::new();
    let service = LogoService::new(Some(storage.clone()), Some(settings.clone()));
    (service, storage, settings)
}

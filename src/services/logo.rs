//! Site logo settings: pick an image, store it, remember its public URL.
//!
//! [`LogoService`] owns the injected collaborators and is shared by every
//! request. [`LogoSettings`] is the state of one mounted settings view: what
//! the logo slot shows, the last feedback banner and where the current
//! upload attempt got to.
//!
//! Only one upload or removal runs at a time per service. A second attempt
//! while one is in flight fails with [`LogoError::Busy`] without touching
//! either collaborator.
//!
//! Objects are never deleted from storage, so each replacement or removal
//! leaves the previous file behind.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::common::LogoError;
use crate::db::SettingsStore;
use crate::models::{
    FeedbackMessage, LOGO_BUCKET, LogoDisplay, LogoSetting, SETTINGS_ID, UploadCandidate,
    UploadPhase,
};
use crate::storage::{ObjectStore, UploadOptions};

pub const UPLOAD_SUCCESS: &str = "Logo uploaded successfully!";
pub const REMOVE_SUCCESS: &str = "Logo removed successfully!";

#[derive(Clone, Default)]
pub struct LogoService {
    storage: Option<Arc<dyn ObjectStore>>,
    settings: Option<Arc<dyn SettingsStore>>,
    in_flight: Arc<Mutex<()>>,
}

impl LogoService {
    pub fn new(
        storage: Option<Arc<dyn ObjectStore>>,
        settings: Option<Arc<dyn SettingsStore>>,
    ) -> Self {
        Self {
            storage,
            settings,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// No collaborators at all.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// True while an upload or removal holds the service.
    pub fn is_busy(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    fn begin(&self) -> Result<OwnedMutexGuard<()>, LogoError> {
        self.in_flight
            .clone()
            .try_lock_owned()
            .map_err(|_| LogoError::Busy)
    }

    /// Persisted logo URL, or `None` when there is none or it cannot be read.
    pub async fn current_logo_url(&self) -> Option<String> {
        let settings = self.settings.as_ref()?;

        match settings.get_settings().await {
            Ok(row) => row.and_then(|r| r.logo_url),
            Err(e) => {
                debug!(error = %e, "logo: no logo found yet");
                None
            }
        }
    }

    /// A fresh settings view with the persisted logo already loaded.
    pub async fn mount(&self) -> LogoSettings {
        let mut view = LogoSettings::new(self.clone());
        view.load_logo().await;
        view
    }
}

pub struct LogoSettings {
    service: LogoService,
    display: LogoDisplay,
    feedback: Option<FeedbackMessage>,
    phase: UploadPhase,
    /// What the slot showed before the current preview replaced it.
    before_preview: Option<LogoDisplay>,
}

impl LogoSettings {
    pub fn new(service: LogoService) -> Self {
        Self {
            service,
            display: LogoDisplay::Unset,
            feedback: None,
            phase: UploadPhase::Idle,
            before_preview: None,
        }
    }

    pub fn display(&self) -> &LogoDisplay {
        &self.display
    }

    pub fn feedback(&self) -> Option<&FeedbackMessage> {
        self.feedback.as_ref()
    }

    /// Furthest phase reached by the last attempt.
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.service.is_busy()
    }

    fn fail(&mut self, err: LogoError) -> LogoError {
        self.feedback = Some(FeedbackMessage::error(err.to_string()));
        err
    }

    /// Read the persisted URL into the view.
    ///
    /// A missing database or a failed read leaves the slot empty and is only
    /// logged: having no logo is a normal state.
    pub async fn load_logo(&mut self) {
        if let Some(url) = self.service.current_logo_url().await {
            self.display = LogoDisplay::Persisted(url);
        }
    }

    /// Validate a picked file, show it locally, then upload it.
    pub async fn select_file(&mut self, candidate: UploadCandidate) -> Result<String, LogoError> {
        self.preview_file(&candidate)?;
        self.upload_logo(&candidate).await
    }

    /// Validate a picked file and put its local preview in the slot.
    ///
    /// Nothing is sent to either collaborator. A rejected file leaves the slot
    /// as it was.
    pub fn preview_file(&mut self, candidate: &UploadCandidate) -> Result<(), LogoError> {
        self.phase = UploadPhase::Validating;

        if let Err(e) = candidate.validate() {
            self.phase = UploadPhase::Rejected;
            return Err(self.fail(e));
        }

        let before = std::mem::replace(
            &mut self.display,
            LogoDisplay::Previewing(candidate.preview_data_uri()),
        );
        if !before.is_preview() {
            self.before_preview = Some(before);
        }
        self.phase = UploadPhase::PreviewReady;
        Ok(())
    }

    /// Store the file and make its URL the persisted logo.
    ///
    /// On failure a pending preview is replaced by what the slot showed
    /// before it.
    pub async fn upload_logo(&mut self, candidate: &UploadCandidate) -> Result<String, LogoError> {
        let result = self.store_logo(candidate).await;
        let before = self.before_preview.take();
        if result.is_err() && self.display.is_preview() {
            self.display = before.unwrap_or_default();
        }
        result
    }

    /// Store the file, resolve its public URL and record it in settings.
    ///
    /// Nothing is rolled back when a later step fails: the stored object
    /// stays where it is and the view keeps its previous URL.
    async fn store_logo(&mut self, candidate: &UploadCandidate) -> Result<String, LogoError> {
        let (Some(storage), Some(settings)) =
            (self.service.storage.clone(), self.service.settings.clone())
        else {
            self.phase = UploadPhase::Failed;
            return Err(self.fail(LogoError::NotConfigured));
        };

        let _guard = match self.service.begin() {
            Ok(guard) => guard,
            Err(e) => {
                self.phase = UploadPhase::Failed;
                return Err(self.fail(e));
            }
        };

        self.phase = UploadPhase::Uploading;
        self.feedback = None;

        let path = candidate.object_path(Utc::now());

        let result = async {
            storage
                .upload(
                    LOGO_BUCKET,
                    &path,
                    &candidate.bytes,
                    &candidate.content_type,
                    UploadOptions { overwrite: true },
                )
                .await
                .map_err(|e| {
                    warn!(%path, error = %e, "logo: storage upload failed");
                    LogoError::upload(e)
                })?;

            let url = storage.public_url(LOGO_BUCKET, &path).map_err(|e| {
                warn!(%path, error = %e, "logo: public url lookup failed, object left in storage");
                LogoError::upload(e)
            })?;

            settings
                .upsert_settings(&LogoSetting::with_url(&url))
                .await
                .map_err(|e| {
                    warn!(%path, error = %e, "logo: settings upsert failed, object left in storage");
                    LogoError::upload(e)
                })?;

            Ok::<_, LogoError>(url)
        }
        .await;

        match result {
            Ok(url) => {
                info!(%url, size = candidate.size(), "logo: uploaded");
                self.display = LogoDisplay::Persisted(url.clone());
                self.phase = UploadPhase::Persisted;
                self.feedback = Some(FeedbackMessage::success(UPLOAD_SUCCESS));
                Ok(url)
            }
            Err(e) => {
                self.phase = UploadPhase::Failed;
                Err(self.fail(e))
            }
        }
    }

    /// Clear the persisted URL. Clearing an already empty record succeeds.
    pub async fn remove_logo(&mut self) -> Result<(), LogoError> {
        let Some(settings) = self.service.settings.clone() else {
            return Err(self.fail(LogoError::NotConfigured));
        };

        let _guard = match self.service.begin() {
            Ok(guard) => guard,
            Err(e) => return Err(self.fail(e)),
        };

        match settings.clear_logo(SETTINGS_ID).await {
            Ok(()) => {
                info!("logo: removed");
                self.display = LogoDisplay::Unset;
                self.feedback = Some(FeedbackMessage::success(REMOVE_SUCCESS));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "logo: removal failed");
                Err(self.fail(LogoError::update(e)))
            }
        }
    }
}

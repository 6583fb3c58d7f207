mod common;

#[cfg(test)]
pub mod logo_flow {
    use std::sync::Arc;
    use tempfile::tempdir;

    use super::common::*;

    use dsatmath::common::LogoError;
    use dsatmath::models::*;
    use dsatmath::services::*;
    use dsatmath::storage::FilesystemStorage;
    use dsatmath::test_utils::*;

    #[tokio::test]
    async fn upload_then_fresh_mount_shows_same_url() {
        let (logo, _, _) = memory_service();

        let mut view = logo.mount().await;
        let url = view.select_file(png(TWO_MB)).await.unwrap();
        assert_eq!(view.display(), &LogoDisplay::Persisted(url.clone()));

        let reloaded = logo.mount().await;
        assert_eq!(reloaded.display().persisted_url(), Some(url.as_str()));
        assert_eq!(logo.current_logo_url().await, Some(url));
    }

    #[tokio::test]
    async fn replacing_a_logo_keeps_the_old_object() {
        let (logo, storage, settings) = memory_service();
        let mut view = logo.mount().await;

        let first = view.select_file(png(10)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = view
            .select_file(UploadCandidate::new("logo.svg", "image/svg+xml", b"<svg/>".to_vec()))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert!(second.ends_with(".svg"));
        assert_eq!(storage.object_keys().len(), 2);
        assert_eq!(settings.row().unwrap().logo_url, Some(second));
    }

    #[tokio::test]
    async fn remove_twice_stays_cleared() {
        let (logo, _, settings) = memory_service();
        let mut view = logo.mount().await;
        view.select_file(png(10)).await.unwrap();

        for _ in 0..2 {
            view.remove_logo().await.unwrap();
            assert_eq!(view.feedback().unwrap().text, REMOVE_SUCCESS);
            assert_eq!(settings.row().unwrap().logo_url, None);
        }

        let reloaded = logo.mount().await;
        assert_eq!(reloaded.display(), &LogoDisplay::Unset);
    }

    #[tokio::test]
    async fn unconfigured_storage_leaves_settings_untouched() {
        let settings = MemorySettingsStore::with_logo("https://cdn.test/assets/logos/old.png");
        let logo = LogoService::new(None, Some(settings.clone()));
        let mut view = logo.mount().await;

        let err = view.select_file(png(TWO_MB)).await.unwrap_err();

        assert_eq!(err, LogoError::NotConfigured);
        assert_eq!(view.feedback().unwrap().text, "Database not configured");
        assert_eq!(settings.writes(), 0);
        assert_eq!(
            view.display().persisted_url(),
            Some("https://cdn.test/assets/logos/old.png")
        );
    }

    #[tokio::test]
    async fn every_non_image_type_is_rejected_with_the_same_message() {
        let (logo, storage, _) = memory_service();
        let mut view = logo.mount().await;

        for mime in ["application/octet-stream", "text/html", "audio/mpeg", "imagepng"] {
            let err = view
                .select_file(UploadCandidate::new("x.png", mime, vec![1; 4]))
                .await
                .unwrap_err();
            assert!(err.is_validation());
            assert_eq!(view.feedback().unwrap().text, "Please select an image file");
        }
        assert_eq!(storage.upload_calls(), 0);
    }

    #[tokio::test]
    async fn filesystem_backend_end_to_end() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FilesystemStorage::new(dir.path(), "/uploads"));
        let settings = MemorySettingsStore::new();
        let logo = LogoService::new(Some(storage), Some(settings.clone()));

        let mut view = logo.mount().await;
        let url = view.select_file(png(64)).await.unwrap();

        assert!(url.starts_with("/uploads/assets/logos/logo-"));
        let relative = url.trim_start_matches("/uploads/");
        assert_eq!(std::fs::read(dir.path().join(relative)).unwrap().len(), 64);
        assert_eq!(settings.row(), Some(LogoSetting::with_url(url)));
    }

    #[tokio::test]
    async fn query_characters_in_file_name_stay_out_of_the_stored_url() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FilesystemStorage::new(dir.path(), "/uploads"));
        let logo = LogoService::new(Some(storage), Some(MemorySettingsStore::new()));

        let mut view = logo.mount().await;
        let picked = UploadCandidate::new("logo.png?v2#top", "image/png", vec![1; 8]);
        let url = view.select_file(picked).await.unwrap();

        assert!(url.ends_with(".png"), "{url}");
        assert!(!url.contains('?') && !url.contains('#'));
        let on_disk = dir.path().join(url.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(on_disk).unwrap(), vec![1; 8]);
    }
}

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, get, post, web};
use tracing::{debug, warn};

use dsatmath::frontend::{NavShell, Route};
use dsatmath::services::LogoSettings;

use crate::web::forms::{NavQuery, read_logo_upload};
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::{PageChrome, SettingsTemplate};

fn settings_page(view: &LogoSettings, menu_open: bool) -> HttpResponse {
    let nav = NavShell::for_path(Route::Settings.path()).with_menu_open(menu_open);
    let header_logo = view.display().persisted_url().map(str::to_string);
    let layout = PageChrome::new(Some(Route::Settings), nav, header_logo);
    render(SettingsTemplate::from_view(layout, view))
}

#[get("/settings")]
pub async fn settings_index(
    state: web::Data<AppState>,
    query: web::Query<NavQuery>,
) -> impl Responder {
    let view = state.logo.mount().await;
    settings_page(&view, query.menu_open())
}

#[post("/settings/logo")]
pub async fn logo_upload(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    let candidate = match read_logo_upload(payload).await {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "settings: malformed upload form");
            return HttpResponse::BadRequest().body(format!("Invalid upload: {e}"));
        }
    };

    let mut view = state.logo.mount().await;
    if let Some(candidate) = candidate {
        // Failures are reported through the view's feedback banner.
        if let Err(e) = view.select_file(candidate).await {
            debug!(error = %e, "settings: logo upload not applied");
        }
    }

    settings_page(&view, false)
}

#[post("/settings/logo/remove")]
pub async fn logo_remove(state: web::Data<AppState>) -> impl Responder {
    let mut view = state.logo.mount().await;
    if let Err(e) = view.remove_logo().await {
        debug!(error = %e, "settings: logo removal not applied");
    }

    settings_page(&view, false)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(settings_index)
        .service(logo_upload)
        .service(logo_remove);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{App, test};
    use std::sync::Arc;

    use dsatmath::models::MAX_LOGO_BYTES;
    use dsatmath::services::LogoService;
    use dsatmath::test_utils::{MemoryObjectStore, MemorySettingsStore, memory_service};

    const BOUNDARY: &str = "----dsatmath-test-boundary";

    fn multipart(file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"logo\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn send(logo: LogoService, req: test::TestRequest) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { logo }))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn upload(file_name: &str, content_type: &str, bytes: &[u8]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/settings/logo")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart(file_name, content_type, bytes))
    }

    #[actix_web::test]
    async fn empty_settings_page_invites_upload() {
        let (status, body) = send(LogoService::unconfigured(), test::TestRequest::get().uri("/settings")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No logo uploaded yet"));
        assert!(body.contains("Upload Logo"));
    }

    #[actix_web::test]
    async fn picked_file_is_previewed_in_the_browser_before_submit() {
        let (_, body) = send(LogoService::unconfigured(), test::TestRequest::get().uri("/settings")).await;

        assert!(body.contains(r#"<img id="logo-preview" class="hidden" alt="Logo">"#));
        assert!(body.contains("reader.readAsDataURL(file)"));
        assert!(body.contains("preview.src = reader.result"));
        let preview_at = body.find("readAsDataURL").unwrap();
        let submit_at = body.find("form.submit()").unwrap();
        assert!(preview_at < submit_at);
    }

    #[actix_web::test]
    async fn upload_persists_and_shows_remote_url() {
        let (logo, storage, settings) = memory_service();

        let (status, body) = send(logo.clone(), upload("brand.png", "image/png", b"\x89PNG")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Logo uploaded successfully!"));
        let url = settings.row().unwrap().logo_url.unwrap();
        assert!(body.contains(&url));
        assert!(!body.contains("data:image/png;base64"));
        assert_eq!(storage.object_keys().len(), 1);

        let (_, reloaded) = send(logo, test::TestRequest::get().uri("/settings")).await;
        assert!(reloaded.contains(&url));
        assert!(reloaded.contains("Change Logo"));
    }

    #[actix_web::test]
    async fn non_image_is_rejected_before_storage() {
        let (logo, storage, _) = memory_service();

        let (_, body) = send(logo, upload("notes.txt", "text/plain", b"hello")).await;

        assert!(body.contains("Please select an image file"));
        assert_eq!(storage.upload_calls(), 0);
    }

    #[actix_web::test]
    async fn oversized_image_is_rejected() {
        let (logo, storage, _) = memory_service();
        let big = vec![0u8; MAX_LOGO_BYTES + 10];

        let (_, body) = send(logo, upload("big.png", "image/png", &big)).await;

        assert!(body.contains("File size must be less than 5MB"));
        assert_eq!(storage.upload_calls(), 0);
    }

    #[actix_web::test]
    async fn missing_storage_reports_configuration_error() {
        let settings = MemorySettingsStore::new();
        let logo = LogoService::new(None, Some(settings.clone()));

        let (_, body) = send(logo, upload("brand.png", "image/png", b"png")).await;

        assert!(body.contains("Database not configured"));
        assert_eq!(settings.writes(), 0);
    }

    #[actix_web::test]
    async fn failed_upsert_keeps_previous_logo() {
        let storage = MemoryObjectStore::new();
        let settings = MemorySettingsStore::with_logo("https://cdn.test/assets/logos/old.png");
        settings.fail_upsert_with("duplicate key value violates unique constraint");
        let logo = LogoService::new(Some(storage), Some(settings));

        let (_, body) = send(logo, upload("brand.png", "image/png", b"png")).await;

        assert!(body.contains("duplicate key value violates unique constraint"));
        assert!(body.contains("https://cdn.test/assets/logos/old.png"));
        assert!(!body.contains("data:image/png;base64"));
    }

    #[actix_web::test]
    async fn remove_twice_reports_success_both_times() {
        let settings: Arc<MemorySettingsStore> =
            MemorySettingsStore::with_logo("https://cdn.test/assets/logos/old.png");
        let logo = LogoService::new(None, Some(settings.clone()));

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/settings/logo/remove");
            let (_, body) = send(logo.clone(), req).await;
            assert!(body.contains("Logo removed successfully!"));
            assert!(body.contains("No logo uploaded yet"));
        }
        assert_eq!(settings.row().unwrap().logo_url, None);
    }

    #[actix_web::test]
    async fn failed_remove_reports_error_and_keeps_logo() {
        let settings = MemorySettingsStore::with_logo("https://cdn.test/assets/logos/old.png");
        settings.fail_clear_with("permission denied for table settings");
        let logo = LogoService::new(None, Some(settings));

        let req = test::TestRequest::post().uri("/settings/logo/remove");
        let (status, body) = send(logo, req).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("permission denied for table settings"));
        assert!(body.contains("https://cdn.test/assets/logos/old.png"));
    }
}

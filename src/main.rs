mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dsatmath::config::{Config, StorageConfig};
use dsatmath::db::{Database, PgSettingsStore, SettingsStore};
use dsatmath::services::LogoService;
use dsatmath::storage::{FilesystemStorage, ObjectStore, SupabaseStorage};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Invalid configuration")?;

    let settings: Option<Arc<dyn SettingsStore>> = match &config.database_url {
        Some(url) => {
            let db = Database::new(url)
                .await
                .context("Failed to connect to database / run migrations")?;
            Some(Arc::new(PgSettingsStore::new(db.pool)))
        }
        None => {
            warn!("DATABASE_URL not set, logo settings are disabled");
            None
        }
    };

    let storage: Option<Arc<dyn ObjectStore>> = match &config.storage {
        StorageConfig::Supabase { url, key } => {
            info!(%url, "storage: supabase");
            Some(Arc::new(SupabaseStorage::new(url, key)))
        }
        StorageConfig::Filesystem { dir, public_base } => {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create upload dir {}", dir.display()))?;
            info!(dir = %dir.display(), %public_base, "storage: filesystem");
            Some(Arc::new(FilesystemStorage::new(dir, public_base)))
        }
        StorageConfig::Disabled => {
            warn!("no storage backend configured, logo uploads are disabled");
            None
        }
    };

    let state = Data::new(web::AppState {
        logo: LogoService::new(storage, settings),
    });
    let static_dir = config.static_dir.clone();
    let upload_mount = config.upload_mount();

    info!(addr = %config.bind_addr, "listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .wrap(Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true));

        if let Some((prefix, dir)) = &upload_mount {
            app = app.service(Files::new(prefix, dir.clone()));
        }

        app.default_service(actix_web::web::to(web::handlers::public::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

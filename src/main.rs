mod bootstrap;

use blog_api::AppState;
use blog_config::StorageConfig;
use blog_events::{AppEvent, EventBus};
use blog_site::{JsonSiteRepository, SiteRepository, SiteStore};
use crate::bootstrap::{config, logging, router, server, storage};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::initialize();

    let events = EventBus::new(true);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("BLOG_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let uploads_root = server::initialize_folders(&config, &events).await?;

    let storage_config = StorageConfig::from_env();
    let storage = storage::initialize(&config, &storage_config, uploads_root.clone(), &events).await?;

    let sites: Arc<dyn SiteRepository> = Arc::new(JsonSiteRepository::new(&config.site.documents_path));
    let site_store = Arc::new(SiteStore::new());
    spawn_site_refresh(Arc::clone(&site_store), Arc::clone(&sites), Arc::clone(&events));

    let app_state = AppState::new(
        storage,
        sites,
        site_store,
        config.server.base_url.clone(),
        uploads_root,
        config.uploads.default_directory.clone(),
        config.server.streaming_threshold_mb,
    );
    let app = router::build(&config, app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        addr,
        base_url: config.server.base_url.clone(),
    });

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}

/// Populates the site store in the background; pages render with
/// placeholders until it completes
fn spawn_site_refresh(store: Arc<SiteStore>, sites: Arc<dyn SiteRepository>, events: Arc<EventBus>) {
    tokio::spawn(async move {
        match store.refresh(sites.as_ref()).await {
            Ok(Some(site)) => events.emit(AppEvent::SiteLoaded {
                title: site.title.clone(),
            }),
            Ok(None) => events.emit(AppEvent::SiteMissing),
            Err(e) => events.emit(AppEvent::Error {
                context: "Failed to load site document".to_string(),
                error: e.to_string(),
            }),
        }
    });
}

use blog_events::{AppEvent, EventBus};
use blog_config::Config;
use blog_filesystem::FileSystem;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Creates `{public_dir}/uploads/{articles,images,videos}` and returns the uploads root
pub async fn initialize_folders(config: &Config, events: &Arc<EventBus>) -> Result<PathBuf> {
    let uploads_root = FileSystem::ensure_public_structure(&config.uploads.public_dir).await?;

    events.emit(AppEvent::LocalStorageReady {
        path: uploads_root.display().to_string(),
    });

    Ok(uploads_root)
}

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.rsplit(':').next().unwrap_or("unknown");
            tracing::error!("Port {} is already in use", port);
            tracing::error!("Stop the other application or change [server].port in config.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("Find process: lsof -i :{}", port);
        } else {
            tracing::error!("Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, initiating graceful shutdown...");
}

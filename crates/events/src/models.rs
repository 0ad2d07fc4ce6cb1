use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, base_url: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { public_dir: String },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Storage selection
    RemoteStorageEnabled { bucket: String, region: String },
    StorageFallback { missing: Vec<String> },
    LocalStorageReady { path: String },

    // Site document
    SiteLoaded { title: Option<String> },
    SiteMissing,

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    #[allow(dead_code)]
    pub(super) silent_mode: bool,
}

mod models;
mod state;
mod validator;
mod pages;
mod site;
pub mod files;
pub mod upload;

pub use models::AppState;
pub use pages::render_home;
pub use site::{get_site, get_site_metadata, reload_site};
pub use files::serve_upload;
pub use upload::upload_file;

use axum::{
    routing::{get, post},
    Router,
};

/// All application routes, without middleware
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(render_home))
        .route("/api/upload", post(upload_file))
        .route("/api/site", get(get_site))
        .route("/api/site/metadata", get(get_site_metadata))
        .route("/api/site/reload", post(reload_site))
        .route("/uploads/*path", get(serve_upload))
}

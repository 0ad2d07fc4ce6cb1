use super::models::AppState;
use crate::errors::ApiError;
use axum::{extract::State, response::Html};
use blog_site::{generate_metadata, render_page};

/// `GET /`: metadata is queried fresh on every request, the author intro
/// reads whatever the site store currently holds
pub async fn render_home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let site = state.sites.find_one().await?;
    let metadata = generate_metadata(site.as_ref(), &state.base_url);
    let snapshot = state.site_store.snapshot().await;

    let html = render_page(&metadata, &snapshot, &state.base_url)?;
    Ok(Html(html))
}

use super::models::AppState;
use crate::errors::ApiError;
use crate::models::ReloadResponse;
use axum::{extract::State, response::Json};
use blog_models::SiteConfig;
use blog_site::{generate_metadata, PageMetadata};

/// `GET /api/site`: the first document of the collection, or `null`
pub async fn get_site(State(state): State<AppState>) -> Result<Json<Option<SiteConfig>>, ApiError> {
    Ok(Json(state.sites.find_one().await?))
}

/// `GET /api/site/metadata`
pub async fn get_site_metadata(State(state): State<AppState>) -> Result<Json<PageMetadata>, ApiError> {
    let site = state.sites.find_one().await?;
    Ok(Json(generate_metadata(site.as_ref(), &state.base_url)))
}

/// `POST /api/site/reload`: re-populates the site store used by components
pub async fn reload_site(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let site = state.site_store.refresh(state.sites.as_ref()).await?;
    let snapshot = state.site_store.snapshot().await;

    let response = ReloadResponse {
        status: if site.is_some() { "loaded" } else { "empty" }.to_string(),
        title: site.and_then(|s| s.title.clone()),
        refreshed_at: snapshot.refreshed_at.map(|t| t.to_rfc3339()),
    };

    tracing::info!("Site store reloaded ({})", response.status);

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::handlers::{routes, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use blog_models::{SeoSettings, SiteConfig};
    use blog_site::{MemorySiteRepository, SiteStore};
    use blog_storage::LocalBackend;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(site: Option<SiteConfig>) -> AppState {
        AppState::new(
            Arc::new(LocalBackend::new("uploads".into(), "/uploads")),
            Arc::new(MemorySiteRepository::new(site)),
            Arc::new(SiteStore::new()),
            "https://blog.example.com".to_string(),
            "uploads".into(),
            "articles".to_string(),
            100,
        )
    }

    async fn call(state: AppState, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = routes().with_state(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample_site() -> SiteConfig {
        SiteConfig {
            title: Some("Rust Notes".to_string()),
            seo: Some(SeoSettings {
                description: Some("Systems and stuff".to_string()),
                keywords: vec!["rust".to_string()],
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_site() {
        let (status, body) = call(state(None), "GET", "/api/site").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());

        let (_, body) = call(state(Some(sample_site())), "GET", "/api/site").await;
        assert_eq!(body["title"], "Rust Notes");
    }

    #[tokio::test]
    async fn test_get_metadata() {
        let (status, body) = call(state(None), "GET", "/api/site/metadata").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "个人博客");
        assert_eq!(body["icons"]["icon"], "/favicon.ico");

        let (_, body) = call(state(Some(sample_site())), "GET", "/api/site/metadata").await;
        assert_eq!(body["title"], "Rust Notes");
        assert_eq!(body["description"], "Systems and stuff");
        assert_eq!(body["openGraph"]["type"], "website");
    }

    #[tokio::test]
    async fn test_reload() {
        let (status, body) = call(state(Some(sample_site())), "POST", "/api/site/reload").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "loaded");
        assert_eq!(body["title"], "Rust Notes");
        assert!(body["refreshed_at"].is_string());

        let (_, body) = call(state(None), "POST", "/api/site/reload").await;
        assert_eq!(body["status"], "empty");
        assert!(body.get("title").is_none());
    }
}

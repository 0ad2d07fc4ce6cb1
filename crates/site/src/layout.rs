use crate::components::{AuthorIntro, DEFAULT_AUTHOR_NAME};
use crate::metadata::{PageMetadata, DEFAULT_TITLE};
use crate::{SiteError, SiteState};
use askama::Template;

/// Root HTML document: metadata head plus page content
#[derive(Template)]
#[template(path = "layout.html")]
pub struct RootLayout<'a> {
    pub metadata: &'a PageMetadata,
    pub organization_ld_json: String,
    pub website_ld_json: String,
    pub content: String,
}

/// Static WebSite JSON-LD emitted on every page
pub fn website_json_ld(site_url: &str) -> serde_json::Value {
    let site_url = site_url.trim_end_matches('/');
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": DEFAULT_TITLE,
        "url": site_url,
        "author": {
            "@type": "Person",
            "name": DEFAULT_AUTHOR_NAME,
        },
        "publisher": {
            "@type": "Organization",
            "name": DEFAULT_TITLE,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}/avatar.png", site_url),
            },
        },
    })
}

/// Renders the home page from per-request metadata and the cached site state
pub fn render_page(
    metadata: &PageMetadata,
    state: &SiteState,
    site_url: &str,
) -> Result<String, SiteError> {
    let content = AuthorIntro::from_state(state).to_html()?;

    let layout = RootLayout {
        metadata,
        organization_ld_json: script_safe(metadata.ld_json().unwrap_or("{}")),
        website_ld_json: script_safe(&website_json_ld(site_url).to_string()),
        content,
    };

    Ok(layout.render()?)
}

// JSON inside <script> must not be able to close the tag
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_metadata;
    use blog_models::SiteConfig;
    use std::sync::Arc;

    #[test]
    fn test_page_with_defaults() {
        let metadata = generate_metadata(None, "https://blog.example.com");
        let html = render_page(&metadata, &SiteState::default(), "https://blog.example.com").unwrap();

        assert!(html.contains("<title>个人博客</title>"));
        assert!(html.contains("分享技术与生活"));
        assert!(html.contains("\"@type\":\"WebSite\""));
        assert!(html.contains("\"@type\":\"Organization\""));
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("name=\"keywords\""));
        assert!(!html.contains("null"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_page_with_site() {
        let site = SiteConfig {
            title: Some("Notes </script>".to_string()),
            is_open_adsense: true,
            google_adsense_id: Some("7".to_string()),
            ..Default::default()
        };
        let metadata = generate_metadata(Some(&site), "https://blog.example.com");
        let state = SiteState {
            site: Some(Arc::new(site)),
            loading: false,
            refreshed_at: None,
        };

        let html = render_page(&metadata, &state, "https://blog.example.com").unwrap();

        assert!(html.contains("<title>Notes &lt;"));
        assert!(!html.contains("Notes </script>"));
        assert!(html.contains("Notes \\u003c/script>"));
        assert!(html.contains("name=\"google-adsense-account\" content=\"ca-pub-7\""));
        assert!(html.contains(DEFAULT_AUTHOR_NAME));
        assert!(!html.contains("animate-pulse"));
    }
}

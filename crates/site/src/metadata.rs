use blog_models::SiteConfig;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_TITLE: &str = "个人博客";
pub const DEFAULT_DESCRIPTION: &str = "分享技术与生活";
pub const DEFAULT_FAVICON: &str = "/favicon.ico";

/// Key under `other` holding the Organization JSON-LD
pub(crate) const LD_JSON_KEY: &str = "script:ld+json";
const ADSENSE_KEY: &str = "google-adsense-account";

/// SEO metadata for one rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub icons: Icons,
    pub open_graph: OpenGraph,
    pub other: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icons {
    pub icon: String,
    pub shortcut: String,
    pub apple: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub site_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PageMetadata {
    pub fn ld_json(&self) -> Option<&str> {
        self.other.get(LD_JSON_KEY).map(String::as_str)
    }

    /// Plain `<meta name=.. content=..>` pairs, script entries excluded
    pub fn meta_tags(&self) -> Vec<(&str, &str)> {
        self.other
            .iter()
            .filter(|(name, _)| !name.starts_with("script:"))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

/// Builds page metadata from the site document; every field falls back to
/// a fixed default when the document or the field is absent.
pub fn generate_metadata(site: Option<&SiteConfig>, site_url: &str) -> PageMetadata {
    let site_url = site_url.trim_end_matches('/');
    let title = site.and_then(SiteConfig::title).unwrap_or(DEFAULT_TITLE);
    let description = site
        .and_then(SiteConfig::seo_description)
        .unwrap_or(DEFAULT_DESCRIPTION);
    let favicon = site.and_then(SiteConfig::favicon).unwrap_or(DEFAULT_FAVICON);
    let keywords = site.map(|s| s.keywords().to_vec()).unwrap_or_default();

    let organization = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": title,
        "url": site_url,
        "logo": site
            .and_then(SiteConfig::favicon)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}/avatar.png", site_url)),
        "sameAs": [site.and_then(SiteConfig::github).unwrap_or("")],
    });

    let mut other = BTreeMap::new();
    if let Some(adsense_id) = site.and_then(SiteConfig::adsense_id) {
        other.insert(ADSENSE_KEY.to_string(), format!("ca-pub-{}", adsense_id));
    }
    other.insert(LD_JSON_KEY.to_string(), organization.to_string());

    PageMetadata {
        title: title.to_string(),
        description: description.to_string(),
        keywords,
        icons: Icons {
            icon: favicon.to_string(),
            shortcut: favicon.to_string(),
            apple: favicon.to_string(),
        },
        open_graph: OpenGraph {
            title: title.to_string(),
            site_name: title.to_string(),
            description: description.to_string(),
            kind: "website".to_string(),
        },
        other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_models::{SeoSettings, SocialLinks};

    const SITE_URL: &str = "https://blog.example.com";

    #[test]
    fn test_defaults_without_document() {
        let metadata = generate_metadata(None, SITE_URL);

        assert_eq!(metadata.title, DEFAULT_TITLE);
        assert_eq!(metadata.description, DEFAULT_DESCRIPTION);
        assert!(metadata.keywords.is_empty());
        assert_eq!(metadata.icons.icon, DEFAULT_FAVICON);
        assert_eq!(metadata.open_graph.site_name, DEFAULT_TITLE);
        assert_eq!(metadata.open_graph.kind, "website");
        assert!(metadata.meta_tags().is_empty());

        let serialized = serde_json::to_string(&metadata).unwrap();
        assert!(!serialized.contains("null"));
        assert!(!serialized.contains("undefined"));
    }

    #[test]
    fn test_organization_json_ld() {
        let metadata = generate_metadata(None, "https://blog.example.com/");
        let ld: serde_json::Value = serde_json::from_str(metadata.ld_json().unwrap()).unwrap();

        assert_eq!(ld["@type"], "Organization");
        assert_eq!(ld["name"], DEFAULT_TITLE);
        assert_eq!(ld["url"], SITE_URL);
        assert_eq!(ld["logo"], "https://blog.example.com/avatar.png");
        assert_eq!(ld["sameAs"], serde_json::json!([""]));
    }

    #[test]
    fn test_document_fields_win() {
        let site = SiteConfig {
            title: Some("Rust Notes".to_string()),
            favicon: Some("https://cdn.example.com/icon.png".to_string()),
            seo: Some(SeoSettings {
                description: Some("Systems programming".to_string()),
                keywords: vec!["rust".to_string()],
            }),
            social: Some(SocialLinks {
                github: Some("https://github.com/notes".to_string()),
                ..Default::default()
            }),
            is_open_adsense: true,
            google_adsense_id: Some("42".to_string()),
            ..Default::default()
        };

        let metadata = generate_metadata(Some(&site), SITE_URL);

        assert_eq!(metadata.title, "Rust Notes");
        assert_eq!(metadata.description, "Systems programming");
        assert_eq!(metadata.keywords, vec!["rust".to_string()]);
        assert_eq!(metadata.icons.apple, "https://cdn.example.com/icon.png");
        assert_eq!(metadata.meta_tags(), vec![("google-adsense-account", "ca-pub-42")]);

        let ld: serde_json::Value = serde_json::from_str(metadata.ld_json().unwrap()).unwrap();
        assert_eq!(ld["logo"], "https://cdn.example.com/icon.png");
        assert_eq!(ld["sameAs"][0], "https://github.com/notes");
    }

    #[test]
    fn test_adsense_omitted_when_disabled() {
        let site = SiteConfig {
            google_adsense_id: Some("42".to_string()),
            ..Default::default()
        };

        let metadata = generate_metadata(Some(&site), SITE_URL);
        assert!(!metadata.other.contains_key(ADSENSE_KEY));
    }
}

use serde::{Deserialize, Serialize};

/// The single site configuration document from the `sites` collection.
/// Every field is optional; consumers substitute their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub is_open_adsense: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_adsense_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SiteConfig {
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn favicon(&self) -> Option<&str> {
        non_empty(self.favicon.as_deref())
    }

    pub fn seo_description(&self) -> Option<&str> {
        non_empty(self.seo.as_ref().and_then(|s| s.description.as_deref()))
    }

    pub fn keywords(&self) -> &[String] {
        self.seo.as_ref().map(|s| s.keywords.as_slice()).unwrap_or(&[])
    }

    pub fn author_name(&self) -> Option<&str> {
        non_empty(self.author.as_ref().and_then(|a| a.name.as_deref()))
    }

    pub fn author_description(&self) -> Option<&str> {
        non_empty(self.author.as_ref().and_then(|a| a.description.as_deref()))
    }

    pub fn github(&self) -> Option<&str> {
        non_empty(self.social.as_ref().and_then(|s| s.github.as_deref()))
    }

    /// Publisher id to advertise, only when ads are switched on
    pub fn adsense_id(&self) -> Option<&str> {
        if self.is_open_adsense {
            non_empty(self.google_adsense_id.as_deref())
        } else {
            None
        }
    }
}

// Empty strings count as missing, like absent fields
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

use crate::{SiteError, SiteState};
use askama::Template;

pub const DEFAULT_AUTHOR_NAME: &str = "博主";
pub const DEFAULT_AUTHOR_DESCRIPTION: &str = "一个热爱生活和分享技术的程序员";

/// Home page author greeting. Shows two pulsing placeholder blocks while the
/// store is loading or has no document.
#[derive(Template, Debug)]
#[template(path = "author_intro.html")]
pub struct AuthorIntro<'a> {
    pub loading: bool,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> AuthorIntro<'a> {
    pub fn from_state(state: &'a SiteState) -> Self {
        match state.site.as_deref() {
            Some(site) if !state.loading => Self {
                loading: false,
                name: site.author_name().unwrap_or(DEFAULT_AUTHOR_NAME),
                description: site
                    .author_description()
                    .unwrap_or(DEFAULT_AUTHOR_DESCRIPTION),
            },
            _ => Self {
                loading: true,
                name: "",
                description: "",
            },
        }
    }

    pub fn to_html(&self) -> Result<String, SiteError> {
        Ok(self.render()?)
    }
}

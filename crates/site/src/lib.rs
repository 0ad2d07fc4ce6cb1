mod components;
mod errors;
mod layout;
mod metadata;
mod repository;
mod store;

pub use components::{AuthorIntro, DEFAULT_AUTHOR_DESCRIPTION, DEFAULT_AUTHOR_NAME};
pub use errors::SiteError;
pub use layout::{render_page, website_json_ld, RootLayout};
pub use metadata::{generate_metadata, Icons, OpenGraph, PageMetadata, DEFAULT_DESCRIPTION, DEFAULT_FAVICON, DEFAULT_TITLE};
pub use repository::{JsonSiteRepository, MemorySiteRepository, SiteRepository};
pub use store::{SiteState, SiteStore};

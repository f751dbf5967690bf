use askama::Template;

/// Template for the landing page.
#[derive(Debug, Default, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub store_configured: bool,
}

use serde::{Deserialize, Serialize};

/// A hyperlink discovered on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL of the target page
    pub url: String,

    /// Trimmed display text of the anchor (never empty)
    pub title: String,
}

impl Link {
    /// Create a new link
    pub fn new(url: String, title: String) -> Self {
        Self { url, title }
    }
}

/// Content extracted from a single visited page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Title of the page
    pub title: String,

    /// URL the page was fetched from
    pub url: String,

    /// Rendered Markdown body
    pub body: String,
}

impl ExtractedPage {
    /// Create a new extracted page
    pub fn new(title: String, url: String, body: String) -> Self {
        Self { title, url, body }
    }
}

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the landing page to start from
    pub start_url: String,

    /// Prefix a link's absolute URL must start with to be harvested
    /// (defaults to the start URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_prefix: Option<String>,

    /// Prioritized CSS selectors for locating a page's main content element
    #[serde(default = "default_content_selectors")]
    pub content_selectors: Vec<String>,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Selector for collapsed navigation groups to expand on the landing page
    #[serde(default = "default_expand_selector")]
    pub expand_selector: String,

    /// Navigation timeout for the landing page, in seconds
    #[serde(default = "default_initial_timeout_secs")]
    pub initial_timeout_secs: u64,

    /// Navigation timeout for each discovered page, in seconds
    #[serde(default = "default_nav_timeout_secs")]
    pub nav_timeout_secs: u64,

    /// Post-load settle delay for the landing page, in milliseconds
    #[serde(default = "default_initial_settle_millis")]
    pub initial_settle_millis: u64,

    /// Post-load settle delay for each discovered page, in milliseconds
    #[serde(default = "default_settle_millis")]
    pub settle_millis: u64,
}

impl ScrapeConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            origin_prefix: None,
            content_selectors: default_content_selectors(),
            webdriver_url: default_webdriver_url(),
            expand_selector: default_expand_selector(),
            initial_timeout_secs: default_initial_timeout_secs(),
            nav_timeout_secs: default_nav_timeout_secs(),
            initial_settle_millis: default_initial_settle_millis(),
            settle_millis: default_settle_millis(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// The effective origin prefix for link filtering
    pub fn origin_prefix(&self) -> &str {
        self.origin_prefix.as_deref().unwrap_or(&self.start_url)
    }
}

/// Default selectors checked in order; first match wins
fn default_content_selectors() -> Vec<String> {
    [
        ".page-inner",
        "main",
        "article",
        ".markdown-section",
        ".markdown-body",
        ".theme-default-content",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default selector for collapsed menu groups
fn default_expand_selector() -> String {
    r#".group-button[aria-expanded="false"]"#.to_string()
}

/// Default landing page navigation timeout
fn default_initial_timeout_secs() -> u64 {
    60
}

/// Default per-page navigation timeout
fn default_nav_timeout_secs() -> u64 {
    30
}

/// Default landing page settle delay
fn default_initial_settle_millis() -> u64 {
    5000
}

/// Default per-page settle delay
fn default_settle_millis() -> u64 {
    2000
}

// Re-export modules
pub mod browser;
pub mod collector;
pub mod config;
pub mod document;
pub mod extractor;
pub mod results;
pub mod scrape;

// Re-export commonly used types for convenience
pub use results::{ExtractedPage, Link};

use config::ScrapeConfig;
use std::error::Error;

/// Builder for configuring and running a documentation-site harvest
pub struct Harvest {
    config: ScrapeConfig,
}

impl Harvest {
    /// Create a new Harvest builder for the given landing page URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: ScrapeConfig::new(start_url),
        }
    }

    /// Apply a full configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        self.config = ScrapeConfig::from_file(path)?;
        Ok(self)
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(mut self, config_str: &str) -> Result<Self, Box<dyn Error>> {
        self.config = ScrapeConfig::from_json(config_str)?;
        Ok(self)
    }

    /// Override the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Override the origin prefix links must match to be harvested
    pub fn with_origin_prefix(mut self, prefix: &str) -> Self {
        self.config.origin_prefix = Some(prefix.to_string());
        self
    }

    /// Override the per-page navigation timeout
    pub fn with_nav_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.nav_timeout_secs = timeout_seconds;
        self
    }

    /// Run the harvest and return the assembled Markdown document
    pub async fn run(mut self) -> Result<String, Box<dyn Error>> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        scrape::run(&self.config).await
    }
}

use fantoccini::{Client, ClientBuilder, Locator};
use std::error::Error;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Pause between menu-expansion clicks, matching the page's animation time
const CLICK_PAUSE: Duration = Duration::from_millis(500);

/// A single WebDriver browser session
pub struct Browser {
    client: Client,
}

impl Browser {
    /// Connects to a WebDriver server, trying common fallback URLs if the
    /// configured one is unreachable.
    pub async fn connect(webdriver_url: &str) -> Result<Self, Box<dyn Error>> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Self::prepare(client).await;
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4723", // Appium default
            "http://localhost:9222", // Chrome debug port default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls.iter() {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Self::prepare(client).await;
            }
        }

        ::log::error!("Failed to connect to any WebDriver server");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err("failed to connect to any WebDriver server".into())
    }

    /// Sizes the window before the session is handed out
    async fn prepare(client: Client) -> Result<Self, Box<dyn Error>> {
        if let Err(e) = client.set_window_size(1200, 800).await {
            ::log::warn!("Failed to set window size: {}", e);
        }
        Ok(Self { client })
    }

    /// Navigates to a URL, bounding the load with `nav_timeout`, then sleeps
    /// for `settle` so client-side rendering can finish.
    pub async fn open(
        &self,
        url: &str,
        nav_timeout: Duration,
        settle: Duration,
    ) -> Result<(), Box<dyn Error>> {
        match timeout(nav_timeout, self.client.goto(url)).await {
            Ok(result) => result?,
            Err(_) => return Err(format!("timed out loading {}", url).into()),
        }
        sleep(settle).await;
        Ok(())
    }

    /// Returns the current page's rendered HTML source
    pub async fn source(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.client.source().await?)
    }

    /// Clicks every collapsed navigation group so the menu exposes its
    /// links. Failures here are harmless and only logged; returns the number
    /// of groups found.
    pub async fn expand_menu_groups(&self, selector: &str) -> usize {
        let buttons = match self.client.find_all(Locator::Css(selector)).await {
            Ok(buttons) => buttons,
            Err(e) => {
                ::log::info!("Menu expansion skipped ({}): {}", selector, e);
                return 0;
            }
        };

        let count = buttons.len();
        ::log::info!("Found {} collapsed menu groups", count);

        for button in buttons {
            if let Err(e) = button.click().await {
                ::log::debug!("Menu group click failed (ignored): {}", e);
            }
            sleep(CLICK_PAUSE).await;
        }

        count
    }

    /// Ends the WebDriver session
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.client.close().await?;
        Ok(())
    }
}

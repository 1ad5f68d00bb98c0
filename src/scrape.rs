use crate::browser::Browser;
use crate::collector;
use crate::config::ScrapeConfig;
use crate::document::MarkdownDoc;
use crate::extractor;
use crate::results::{ExtractedPage, Link};
use scraper::Html;
use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;
use url::Url;

/// Runs a full harvest: landing page, link collection, then one sequential
/// visit per discovered link. Returns the assembled Markdown document.
pub async fn run(config: &ScrapeConfig) -> Result<String, Box<dyn Error>> {
    ::log::info!("Starting harvest for: {}", config.start_url);

    let start_url = Url::parse(&config.start_url)?;
    let browser = Browser::connect(&config.webdriver_url).await?;

    ::log::info!("Navigating to {}", config.start_url);
    browser
        .open(
            config.start_url.as_str(),
            Duration::from_secs(config.initial_timeout_secs),
            Duration::from_millis(config.initial_settle_millis),
        )
        .await?;

    let landing_source = browser.source().await?;
    let landing = Html::parse_document(&landing_source);
    let site_title =
        extractor::document_title(&landing).unwrap_or_else(|| config.start_url.clone());
    let mut doc = MarkdownDoc::new(&site_title);

    // Collapsed menu groups hide most internal links, so expand before
    // collecting, then take a fresh snapshot of the landing page.
    browser.expand_menu_groups(&config.expand_selector).await;
    let expanded_source = browser.source().await?;
    let expanded = Html::parse_document(&expanded_source);
    let links = collector::collect_links(&expanded, &start_url, config.origin_prefix());
    ::log::info!("Found {} page links", links.len());

    let mut visited: HashSet<String> = HashSet::new();
    for link in &links {
        if !visited.insert(link.url.clone()) {
            ::log::trace!("Skipping already visited: {}", link.url);
            continue;
        }

        ::log::info!("Processing \"{}\" ({})", link.title, link.url);
        match visit(&browser, link, config).await {
            Ok(page) => doc.push_page(&page),
            Err(e) => {
                ::log::error!("Failed to process {}: {}", link.url, e);
                doc.push_failure();
            }
        }
    }

    ::log::info!("Harvested {} of {} pages", doc.page_count(), links.len());
    browser.close().await?;

    Ok(doc.finish())
}

/// Loads one discovered page and extracts its content
async fn visit(
    browser: &Browser,
    link: &Link,
    config: &ScrapeConfig,
) -> Result<ExtractedPage, Box<dyn Error>> {
    browser
        .open(
            &link.url,
            Duration::from_secs(config.nav_timeout_secs),
            Duration::from_millis(config.settle_millis),
        )
        .await?;

    let source = browser.source().await?;
    let doc = Html::parse_document(&source);

    // Pages without a <title> fall back to the link's display text
    let title = extractor::document_title(&doc).unwrap_or_else(|| link.title.clone());
    let body = extractor::extract_page(&doc, &config.content_selectors);

    Ok(ExtractedPage::new(title, link.url.clone(), body))
}

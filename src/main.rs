use clap::Parser;
use sitemark::Harvest;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting harvest for URL: {}", args.url);

    println!("Note: Harvesting requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Build the harvest from the arguments; explicit flags win over the
    // config file
    let mut harvest = Harvest::new(&args.url);

    if let Some(path) = &args.config {
        harvest = match harvest.with_config_file(path) {
            Ok(harvest) => harvest,
            Err(e) => {
                ::log::error!("Failed to load config file {}: {}", path.display(), e);
                return;
            }
        };
    }

    if let Some(url) = &args.webdriver_url {
        harvest = harvest.with_webdriver_url(url);
    }

    if let Some(timeout) = args.nav_timeout {
        harvest = harvest.with_nav_timeout(timeout);
    }

    let start_time = std::time::Instant::now();

    // Run the harvest and write the document
    let markdown = match harvest.run().await {
        Ok(markdown) => markdown,
        Err(e) => {
            ::log::error!("Harvest failed: {}", e);
            return;
        }
    };

    ::log::info!("Saving document to {}", args.output.display());
    if let Err(e) = std::fs::write(&args.output, &markdown) {
        ::log::error!("Failed to write {}: {}", args.output.display(), e);
        return;
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Harvest complete - wrote {} bytes in {:.2} seconds",
        markdown.len(),
        duration.as_secs_f64()
    );
}

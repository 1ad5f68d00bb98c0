use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemark")]
#[command(about = "Harvests a documentation site into a single Markdown file")]
#[command(version)]
pub struct Args {
    /// URL of the site's landing page
    pub url: String,

    /// File to write the assembled Markdown document to
    #[arg(short, long, default_value = "result.md")]
    pub output: PathBuf,

    /// JSON configuration file (overrides the URL argument)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Per-page navigation timeout in seconds
    #[arg(long)]
    pub nav_timeout: Option<u64>,
}

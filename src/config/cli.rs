use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// News listing page scanned for article links
    #[arg(long, default_value = "https://www.ign.com/news")]
    pub index_url: String,

    /// Prefix joined with relative article links
    #[arg(long, default_value = "https://www.ign.com")]
    pub base_url: String,

    /// Path prefix identifying article links on the index page
    #[arg(long, default_value = "/articles/")]
    pub article_prefix: String,

    /// Selector for the title element inside an article link
    #[arg(long, default_value = "span.item-title")]
    pub title_selector: String,

    /// Selector for the main text region of an article page
    #[arg(long, default_value = "section.article-page")]
    pub content_selector: String,

    /// Number of articles analyzed per game
    #[arg(
        long,
        default_value_t = 10,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub articles_per_game: usize,

    /// Minimum delay between article fetches, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub rate_limit_ms: u64,

    /// Wait after each scroll of the index page, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub scroll_pause_ms: u64,

    /// Chrome/Chromium binary; auto-detected when omitted
    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Timeout for a single article fetch, in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub(crate) mod cli;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Where articles are discovered and how their markup is read.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub index_url: String,
    pub base_url: String,
    pub article_prefix: String,
    pub title_selector: String,
    pub content_selector: String,
}

impl SiteProfile {
    /// Selector matching every article link on the index page.
    pub fn link_selector(&self) -> String {
        format!("a[href^='{}']", self.article_prefix)
    }
}

pub struct Config {
    pub args: Args,
    pub site: SiteProfile,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let site = SiteProfile {
            index_url: args.index_url.clone(),
            base_url: args.base_url.trim_end_matches('/').to_string(),
            article_prefix: args.article_prefix.clone(),
            title_selector: args.title_selector.clone(),
            content_selector: args.content_selector.clone(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            args,
            site,
            http_client,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.args.port))
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.args.rate_limit_ms)
    }

    pub fn scroll_pause(&self) -> Duration {
        Duration::from_millis(self.args.scroll_pause_ms)
    }
}

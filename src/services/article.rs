use crate::domain::ArticleAnalysis;
use crate::error::Result;
use crate::infrastructure::{extract_article_text, RateLimiter, Selectors, SentimentModel};
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ArticleFetcher {
    client: Client,
    limiter: Arc<RateLimiter>,
    scorer: Arc<dyn SentimentModel>,
    selectors: Arc<Selectors>,
}

impl ArticleFetcher {
    pub fn new(
        client: Client,
        limiter: Arc<RateLimiter>,
        scorer: Arc<dyn SentimentModel>,
        selectors: Arc<Selectors>,
    ) -> Self {
        Self {
            client,
            limiter,
            scorer,
            selectors,
        }
    }

    /// Fetches one article and scores its main text.
    ///
    /// A non-200 status or a page without a content region yields an empty
    /// analysis rather than an error. Transport failures are returned as
    /// errors.
    pub async fn fetch(&self, url: &str) -> Result<ArticleAnalysis> {
        self.limiter.acquire().await;

        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            warn!("Failed to fetch {}: HTTP {}", url, response.status());
            return Ok(ArticleAnalysis::empty());
        }

        let body = response.text().await?;
        let text = {
            let document = Html::parse_document(&body);
            extract_article_text(&document, &self.selectors)
        };
        let Some(text) = text else {
            debug!("No content region in {}", url);
            return Ok(ArticleAnalysis::empty());
        };

        let sentiment = self.scorer.compound(&text);
        debug!("Scored {}: sentiment {:.3}", url, sentiment);

        Ok(ArticleAnalysis {
            content: Some(text),
            sentiment,
        })
    }
}

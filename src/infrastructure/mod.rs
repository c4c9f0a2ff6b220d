mod browser;
mod rate_limit;
mod scrapers;
mod sentiment;

pub use browser::{chrome::ChromeDriver, PageDriver};
pub use rate_limit::RateLimiter;
pub use scrapers::{
    articles::{extract_article_links, extract_article_text},
    Selectors,
};
pub use sentiment::{SentimentModel, VaderScorer};

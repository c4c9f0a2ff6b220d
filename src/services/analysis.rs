use crate::domain::{GameAnalysis, GameName};
use crate::error::Result;
use crate::services::article::ArticleFetcher;
use crate::services::discovery::LinkDiscoverer;
use tracing::info;

pub struct AnalysisService {
    discoverer: LinkDiscoverer,
    fetcher: ArticleFetcher,
    articles_per_game: usize,
}

impl AnalysisService {
    pub fn new(
        discoverer: LinkDiscoverer,
        fetcher: ArticleFetcher,
        articles_per_game: usize,
    ) -> Self {
        info!("Created analysis service ({} articles per game)", articles_per_game);
        Self {
            discoverer,
            fetcher,
            articles_per_game,
        }
    }

    /// Average word count and sentiment over recent articles about `game`.
    ///
    /// `Ok(None)` means no article links were found at all. Articles that
    /// failed to load or had no text still count towards the averages.
    pub async fn analyze(&self, game: &GameName) -> Result<Option<GameAnalysis>> {
        info!("Starting article analysis for {}", game);

        let urls = self.discoverer.discover(game, self.articles_per_game).await?;
        if urls.is_empty() {
            info!("No articles found for {}", game);
            return Ok(None);
        }

        let mut articles = Vec::with_capacity(urls.len());
        for url in &urls {
            articles.push(self.fetcher.fetch(url).await?);
        }

        let analysis = GameAnalysis::from_articles(&articles);
        if let Some(analysis) = &analysis {
            info!(
                "Analyzed {} articles for {}: {:.1} words, sentiment {:.3}",
                articles.len(),
                game,
                analysis.average_word_count,
                analysis.average_sentiment_score
            );
        }

        Ok(analysis)
    }
}

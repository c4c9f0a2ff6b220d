use super::GameName;
use serde::Serialize;

/// Text and polarity extracted from a single article page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleAnalysis {
    pub content: Option<String>,
    pub sentiment: f64,
}

impl ArticleAnalysis {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn word_count(&self) -> usize {
        self.content
            .as_deref()
            .map(|text| text.split_whitespace().count())
            .unwrap_or(0)
    }
}

/// Averages over every discovered article for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameAnalysis {
    pub average_word_count: f64,
    pub average_sentiment_score: f64,
}

impl GameAnalysis {
    /// Averages over `articles`, counting empty ones in the denominator.
    /// Returns `None` for an empty slice.
    pub fn from_articles(articles: &[ArticleAnalysis]) -> Option<Self> {
        if articles.is_empty() {
            return None;
        }

        let (total_words, total_sentiment) = articles
            .iter()
            .filter(|article| article.content.is_some())
            .fold((0usize, 0.0f64), |(words, sentiment), article| {
                (words + article.word_count(), sentiment + article.sentiment)
            });

        let count = articles.len() as f64;
        Some(Self {
            average_word_count: total_words as f64 / count,
            average_sentiment_score: total_sentiment / count,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct GameAnalysisResponse {
    pub game: GameName,
    pub average_word_count: f64,
    pub average_sentiment_score: f64,
}

impl GameAnalysisResponse {
    pub fn new(game: GameName, analysis: GameAnalysis) -> Self {
        Self {
            game,
            average_word_count: analysis.average_word_count,
            average_sentiment_score: analysis.average_sentiment_score,
        }
    }
}

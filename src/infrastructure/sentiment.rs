use vader_sentiment::SentimentIntensityAnalyzer;

/// A general-purpose polarity model.
pub trait SentimentModel: Send + Sync {
    /// Compound polarity of `text`, in [-1.0, 1.0].
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon and rule based scorer using the VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}

mod analysis;
mod game;

pub use analysis::{ArticleAnalysis, GameAnalysis, GameAnalysisResponse};
pub use game::{GameCatalog, GameName};

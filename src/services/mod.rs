pub mod analysis;
pub mod article;
pub mod discovery;

pub use analysis::AnalysisService;
pub use article::ArticleFetcher;
pub use discovery::LinkDiscoverer;

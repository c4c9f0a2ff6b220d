use crate::config::Config;
use crate::domain::GameCatalog;
use crate::error::Result;
use crate::infrastructure::{ChromeDriver, RateLimiter, Selectors, VaderScorer};
use crate::services::{AnalysisService, ArticleFetcher, LinkDiscoverer};
use crate::web::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
#[cfg(test)]
mod testing;
mod web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.args.log_level)),
        )
        .init();

    let selectors = Arc::new(Selectors::new(&config.site)?);
    let scorer = Arc::new(VaderScorer::new());
    let limiter = Arc::new(RateLimiter::new(config.rate_limit()));

    let chrome_path = config.args.chrome_path.clone();
    let driver = tokio::task::spawn_blocking(move || ChromeDriver::launch(chrome_path))
        .await
        .map_err(|e| error::GameError::Browser(e.to_string()))??;

    let discoverer = LinkDiscoverer::new(
        Box::new(driver),
        config.site.clone(),
        selectors.clone(),
        config.scroll_pause(),
    );
    let fetcher = ArticleFetcher::new(config.http_client.clone(), limiter, scorer, selectors);
    let analysis = AnalysisService::new(discoverer, fetcher, config.args.articles_per_game);

    let app = web::create_app(AppState {
        analysis: Arc::new(analysis),
        catalog: GameCatalog::default(),
    });

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

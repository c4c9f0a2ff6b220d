use crate::config::SiteProfile;
use crate::domain::GameName;
use crate::error::{GameError, Result};
use crate::infrastructure::{extract_article_links, PageDriver, Selectors};
use scraper::Html;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info};

/// Finds article links for a game on an infinite-scroll index page.
///
/// Owns the single browser session; each call holds it exclusively for the
/// whole load, scroll and read sequence.
pub struct LinkDiscoverer {
    driver: Arc<Mutex<Box<dyn PageDriver>>>,
    site: SiteProfile,
    selectors: Arc<Selectors>,
    scroll_pause: Duration,
}

impl LinkDiscoverer {
    pub fn new(
        driver: Box<dyn PageDriver>,
        site: SiteProfile,
        selectors: Arc<Selectors>,
        scroll_pause: Duration,
    ) -> Self {
        Self {
            driver: Arc::new(Mutex::new(driver)),
            site,
            selectors,
            scroll_pause,
        }
    }

    /// Returns up to `limit` absolute article URLs whose titles mention `game`.
    /// An empty list is a normal outcome.
    pub async fn discover(&self, game: &GameName, limit: usize) -> Result<Vec<String>> {
        let driver = self.driver.clone();
        let site = self.site.clone();
        let selectors = self.selectors.clone();
        let game = game.clone();
        let scroll_pause = self.scroll_pause;

        tokio::task::spawn_blocking(move || -> Result<Vec<String>> {
            let source = {
                let mut driver = driver
                    .lock()
                    .map_err(|_| GameError::Browser("browser session lock poisoned".to_string()))?;
                load_feed(&mut **driver, &site, limit, scroll_pause)?;
                driver.page_source()?
            };

            let document = Html::parse_document(&source);
            let links = extract_article_links(&document, &selectors, &site.base_url, &game, limit);
            info!("Discovered {} article links for {}", links.len(), game);
            Ok(links)
        })
        .await
        .map_err(|e| GameError::Browser(format!("discovery task failed: {e}")))?
    }
}

/// Opens the index page and scrolls until `target` article links are present
/// or the page stops growing. Returns the number of scrolls performed.
fn load_feed(
    driver: &mut dyn PageDriver,
    site: &SiteProfile,
    target: usize,
    scroll_pause: Duration,
) -> Result<usize> {
    info!("Loading index page {}", site.index_url);
    driver.open(&site.index_url)?;

    let link_selector = site.link_selector();
    let mut last_height = driver.scroll_height()?;
    let mut scrolls = 0;

    while driver.count_matching(&link_selector)? < target {
        driver.scroll_to_bottom()?;
        std::thread::sleep(scroll_pause);
        scrolls += 1;

        let new_height = driver.scroll_height()?;
        debug!("Scroll {}: page height {} -> {}", scrolls, last_height, new_height);
        if new_height == last_height {
            debug!("Reached end of feed");
            break;
        }
        last_height = new_height;
    }

    Ok(scrolls)
}

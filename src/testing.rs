//! Fixtures shared by the unit tests.

use crate::config::SiteProfile;
use crate::error::{GameError, Result};
use crate::infrastructure::PageDriver;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn site(base_url: &str) -> SiteProfile {
    SiteProfile {
        index_url: format!("{base_url}/news"),
        base_url: base_url.to_string(),
        article_prefix: "/articles/".to_string(),
        title_selector: "span.item-title".to_string(),
        content_selector: "section.article-page".to_string(),
    }
}

/// Index page markup with one article link per `(slug, title)`.
pub fn index_page(links: &[(&str, &str)]) -> String {
    let items: String = links
        .iter()
        .map(|(slug, title)| {
            format!(
                r#"<a href="/articles/{slug}"><div class="item-body"><span class="item-title">{title}</span></div></a>"#
            )
        })
        .collect();
    format!("<html><body><main>{items}</main></body></html>")
}

/// Article page markup with the given body text in its content region.
pub fn article_page(text: &str) -> String {
    format!(
        r#"<html><body><nav>Home News</nav><section class="article-page"><p>{text}</p></section></body></html>"#
    )
}

/// What a `ScriptedDriver` was asked to do.
#[derive(Default)]
pub struct DriverLog {
    pub opened: Mutex<Vec<String>>,
    pub scrolls: AtomicUsize,
}

impl DriverLog {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

/// How `ScriptedDriver::open` misbehaves, if at all.
#[derive(Clone, Copy)]
pub enum OpenFailure {
    /// Returns a browser error, as a crashed session would.
    Error,
    /// Panics while holding the session.
    Panic,
}

/// A fake browser page: page height and link count follow a script indexed
/// by the number of scrolls performed so far.
pub struct ScriptedDriver {
    heights: Vec<u64>,
    link_counts: Vec<usize>,
    source: String,
    open_failure: Option<OpenFailure>,
    log: Arc<DriverLog>,
}

impl ScriptedDriver {
    pub fn new(heights: Vec<u64>, link_counts: Vec<usize>, source: String) -> Self {
        Self {
            heights,
            link_counts,
            source,
            open_failure: None,
            log: Arc::new(DriverLog::default()),
        }
    }

    /// A session whose every navigation fails.
    pub fn failing(failure: OpenFailure) -> Self {
        Self {
            open_failure: Some(failure),
            ..Self::static_page(String::new())
        }
    }

    /// A page that is fully loaded from the start.
    pub fn static_page(source: String) -> Self {
        Self::new(vec![1000], vec![0], source)
    }

    pub fn log(&self) -> Arc<DriverLog> {
        self.log.clone()
    }

    fn step<T: Copy>(&self, script: &[T]) -> T {
        let scrolls = self.log.scrolls();
        script[scrolls.min(script.len() - 1)]
    }
}

impl PageDriver for ScriptedDriver {
    fn open(&mut self, url: &str) -> Result<()> {
        self.log.opened.lock().unwrap().push(url.to_string());
        match self.open_failure {
            None => Ok(()),
            Some(OpenFailure::Error) => {
                Err(GameError::Browser("session crashed during navigation".to_string()))
            }
            Some(OpenFailure::Panic) => panic!("browser session died"),
        }
    }

    fn scroll_height(&mut self) -> Result<u64> {
        Ok(self.step(&self.heights))
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.log.scrolls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn count_matching(&mut self, _selector: &str) -> Result<usize> {
        Ok(self.step(&self.link_counts))
    }

    fn page_source(&mut self) -> Result<String> {
        Ok(self.source.clone())
    }
}

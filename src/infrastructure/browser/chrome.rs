use super::PageDriver;
use crate::error::{GameError, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Keep the session alive between requests; the default closes it after 30s.
const IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// A single headless Chrome tab reused for every discovery.
pub struct ChromeDriver {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeDriver {
    pub fn launch(chrome_path: Option<PathBuf>) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(chrome_path)
            .idle_browser_timeout(IDLE_TIMEOUT)
            .args(vec![OsStr::new("--disable-dev-shm-usage")])
            .build()
            .map_err(|e| GameError::Browser(e.to_string()))?;

        let browser = Browser::new(options).map_err(browser_error)?;
        let tab = browser.new_tab().map_err(browser_error)?;
        info!("Launched headless browser session");

        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    fn evaluate(&self, script: &str) -> Result<Value> {
        let result = self.tab.evaluate(script, false).map_err(browser_error)?;
        Ok(result.value.unwrap_or(Value::Null))
    }
}

impl PageDriver for ChromeDriver {
    fn open(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(browser_error)?
            .wait_until_navigated()
            .map_err(browser_error)?;
        Ok(())
    }

    fn scroll_height(&mut self) -> Result<u64> {
        let value = self.evaluate("document.body.scrollHeight")?;
        value
            .as_f64()
            .map(|height| height as u64)
            .ok_or_else(|| GameError::Parse(format!("unexpected scroll height: {value}")))
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.evaluate("window.scrollTo(0, document.body.scrollHeight)")?;
        Ok(())
    }

    fn count_matching(&mut self, selector: &str) -> Result<usize> {
        let script = format!(
            "document.querySelectorAll({}).length",
            serde_json::to_string(selector)?
        );
        let value = self.evaluate(&script)?;
        value
            .as_u64()
            .map(|count| count as usize)
            .ok_or_else(|| GameError::Parse(format!("unexpected element count: {value}")))
    }

    fn page_source(&mut self) -> Result<String> {
        self.tab.get_content().map_err(browser_error)
    }
}

fn browser_error(e: impl std::fmt::Display) -> GameError {
    GameError::Browser(e.to_string())
}

use crate::config::SiteProfile;
use crate::error::{GameError, Result};
use scraper::Selector;

pub(crate) mod articles;

pub struct Selectors {
    pub link: Selector,
    pub title: Selector,
    pub content: Selector,
}

impl Selectors {
    pub fn new(site: &SiteProfile) -> Result<Self> {
        Ok(Self {
            link: parse(&site.link_selector())?,
            title: parse(&site.title_selector)?,
            content: parse(&site.content_selector)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GameError::Selector(format!("{selector}: {e}")))
}

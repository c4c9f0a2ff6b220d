use crate::error::Result;

pub(crate) mod chrome;

/// The operations link discovery needs from a live browser page.
pub trait PageDriver: Send {
    fn open(&mut self, url: &str) -> Result<()>;
    fn scroll_height(&mut self) -> Result<u64>;
    fn scroll_to_bottom(&mut self) -> Result<()>;
    fn count_matching(&mut self, selector: &str) -> Result<usize>;
    fn page_source(&mut self) -> Result<String>;
}

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Process-wide spacing between outbound article fetches.
///
/// The lock is held while waiting, so concurrent callers queue up and each
/// one starts at least `interval` after the previous.
pub struct RateLimiter {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    /// Waits for this caller's turn and returns the instant it was granted.
    pub async fn acquire(&self) -> Instant {
        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                debug!("Rate limiting: waiting {:?}", wait);
                sleep(wait).await;
            }
        }

        let granted = Instant::now();
        *last_request = Some(granted);
        granted
    }
}

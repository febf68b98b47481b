use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

mod webdriver;
pub use webdriver::{WebDriverFactory, WebDriverSession};

/// A live browser the movies scraper drives.
///
/// `close` consumes the session; callers must reach it on every exit path.
#[async_trait]
pub trait BrowserSession: Send {
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Poll until at least one element matches `selector`, failing after `timeout`.
    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()>;

    /// Outer HTML of every element matching `selector`, in document order.
    ///
    /// The outer `Err` means the lookup itself failed; an inner `Err` is one
    /// element that could not be read (e.g. it went stale after a re-render).
    async fn find_all(&mut self, selector: &str) -> Result<Vec<Result<String>>>;

    async fn close(self: Box<Self>) -> Result<()>;
}

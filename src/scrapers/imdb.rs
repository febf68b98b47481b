use std::fmt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::models::MovieRecord;
use crate::parsers::imdb::{ImdbParser, CONTAINER_CSS};

pub const DEFAULT_SETTLE: Duration = Duration::from_millis(3500);
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Progress of a single chart scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeStage {
    Idle,
    Navigated,
    Rendered,
    Extracting,
    Done,
    Failed,
}

impl fmt::Display for ScrapeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScrapeStage::Idle => "idle",
            ScrapeStage::Navigated => "navigated",
            ScrapeStage::Rendered => "rendered",
            ScrapeStage::Extracting => "extracting",
            ScrapeStage::Done => "done",
            ScrapeStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Collects the top-movies chart from a browser session.
///
/// Failures never propagate: they are logged and the records gathered so far
/// (possibly none) are returned. The session is closed before returning.
pub struct ImdbScraper {
    session: Box<dyn BrowserSession>,
    settle: Duration,
    render_timeout: Duration,
    stage: ScrapeStage,
}

impl ImdbScraper {
    pub fn new(session: Box<dyn BrowserSession>) -> Self {
        Self {
            session,
            settle: DEFAULT_SETTLE,
            render_timeout: DEFAULT_RENDER_TIMEOUT,
            stage: ScrapeStage::Idle,
        }
    }

    pub fn with_timing(mut self, settle: Duration, render_timeout: Duration) -> Self {
        self.settle = settle;
        self.render_timeout = render_timeout;
        self
    }

    pub async fn get_top_movies(self, url: &str) -> Vec<MovieRecord> {
        self.run(url).await.0
    }

    /// Like [`get_top_movies`](Self::get_top_movies), also reporting the final stage.
    pub async fn run(mut self, url: &str) -> (Vec<MovieRecord>, ScrapeStage) {
        info!("Starting scrape of {}", url);
        let mut records = Vec::new();

        match self.collect(url, &mut records).await {
            Ok(()) => {
                self.advance(ScrapeStage::Done);
                info!("Success! {} movies collected", records.len());
            }
            Err(e) => {
                error!(stage = %self.stage, "Movie scrape failed: {}", e);
                self.advance(ScrapeStage::Failed);
            }
        }

        let stage = self.stage;
        if let Err(e) = self.session.close().await {
            warn!("Failed to close browser session: {}", e);
        }

        (records, stage)
    }

    async fn collect(&mut self, url: &str, records: &mut Vec<MovieRecord>) -> Result<()> {
        self.session.navigate(url).await?;
        self.advance(ScrapeStage::Navigated);

        sleep(self.settle).await;
        self.session.wait_for(CONTAINER_CSS, self.render_timeout).await?;
        self.advance(ScrapeStage::Rendered);

        let containers = self.session.find_all(CONTAINER_CSS).await?;
        self.advance(ScrapeStage::Extracting);
        debug!("Found {} movie containers", containers.len());

        for (index, container) in containers.into_iter().enumerate() {
            match container.and_then(|html| ImdbParser::extract(&html)) {
                Ok(record) => records.push(record),
                Err(e) => warn!(index, "Error extracting movie data: {}", e),
            }
        }

        Ok(())
    }

    fn advance(&mut self, stage: ScrapeStage) {
        debug!("Scrape stage {} -> {}", self.stage, stage);
        self.stage = stage;
    }
}

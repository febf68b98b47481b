use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};
use url::Url;

use crate::browser::{BrowserSession, WebDriverFactory};
use crate::config::Config;
use crate::error::Result;
use crate::export::JsonExporter;
use crate::models::{MovieRecord, Quote};
use crate::parsers::QuotesParser;
use crate::scrapers::{ImdbScraper, QuotesScraper};
use crate::utils::http::{HttpClient, PageFetcher};

/// Movies flow. Never fails: session problems are logged and yield no records.
pub async fn run_movies(config: &Config) -> Vec<MovieRecord> {
    info!("Starting task: IMDb");

    match WebDriverFactory::create_chrome_session(config).await {
        Ok(session) => run_movies_with(Box::new(session), config).await,
        Err(e) => {
            error!("Could not start browser session: {}", e);
            Vec::new()
        }
    }
}

pub async fn run_movies_with(session: Box<dyn BrowserSession>, config: &Config) -> Vec<MovieRecord> {
    let movies = ImdbScraper::new(session)
        .with_timing(config.render_settle(), config.render_timeout())
        .get_top_movies(&config.movies_url)
        .await;

    export(&movies, &config.movies_output);
    movies
}

/// Quotes flow. Any fetch failure is returned to the caller.
pub async fn run_quotes(config: &Config) -> Result<Vec<Quote>> {
    info!("Starting task: Quotes");
    let client = HttpClient::new(config)?;
    run_quotes_with(client, config).await
}

pub async fn run_quotes_with<F: PageFetcher>(client: F, config: &Config) -> Result<Vec<Quote>> {
    let start_url = Url::parse(&config.quotes_start_url)?;
    let quotes = QuotesScraper::new(start_url, client, QuotesParser::new())
        .with_max_pages(config.max_pages)
        .scrape()
        .await?;

    export(&quotes, &config.quotes_output);
    info!("Total quotes collected: {}", quotes.len());
    Ok(quotes)
}

fn export<T: Serialize>(records: &[T], path: &Path) {
    if records.is_empty() {
        warn!("Nothing collected, not writing {}", path.display());
        return;
    }

    if let Err(e) = JsonExporter::save(records, path) {
        error!("Failed to save {}: {}", path.display(), e);
    }
}

use std::collections::HashSet;
use tracing::{info, warn};
use url::Url;

use crate::error::Result;
use crate::models::Quote;
use crate::parsers::QuotesParser;
use crate::utils::http::PageFetcher;

pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Follows next-page links from a start URL, collecting quotes in visit order.
///
/// Fetch failures abort the whole scrape. The loop stops on the first page
/// without a next link, on a link back to an already visited page, or after
/// `max_pages` pages.
pub struct QuotesScraper<F> {
    start_url: Url,
    client: F,
    parser: QuotesParser,
    max_pages: usize,
}

impl<F: PageFetcher> QuotesScraper<F> {
    pub fn new(start_url: Url, client: F, parser: QuotesParser) -> Self {
        Self {
            start_url,
            client,
            parser,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub async fn scrape(&self) -> Result<Vec<Quote>> {
        info!("Starting scraper for {}", self.start_url);

        let mut quotes = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.start_url.clone());

        while let Some(url) = next.take() {
            if visited.len() >= self.max_pages {
                warn!(
                    max_pages = self.max_pages,
                    "Page limit reached, not fetching {}", url
                );
                break;
            }
            visited.insert(page_key(&url));

            info!("Fetching page: {}", url);
            let html = self.client.get(&url).await?;

            let page_quotes = self.parser.parse(&html);
            info!(page = visited.len(), "{} quotes collected", page_quotes.len());
            quotes.extend(page_quotes);

            next = match self.parser.next_page(&html, &url) {
                Some(candidate) if visited.contains(&page_key(&candidate)) => {
                    warn!("Next page {} was already visited, stopping", candidate);
                    None
                }
                other => other,
            };
        }

        Ok(quotes)
    }
}

/// Fragments never select a different document.
fn page_key(url: &Url) -> Url {
    let mut key = url.clone();
    key.set_fragment(None);
    key
}

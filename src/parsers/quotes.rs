use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::{parse_selector, select_raw_text};
use crate::models::Quote;

static QUOTE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("div.quote"));
static MESSAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("span.text"));
static AUTHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("small.author"));
static NEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("li.next"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("a[href]"));

/// Extracts quotes and the pagination link from a quotes listing page.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuotesParser;

impl QuotesParser {
    pub fn new() -> Self {
        Self
    }

    /// All well-formed quotes on the page, in document order.
    ///
    /// A quote element missing its message or author is skipped with a warning.
    pub fn parse(&self, html: &str) -> Vec<Quote> {
        let document = Html::parse_document(html);
        let mut quotes = Vec::new();

        for (index, element) in document.select(&QUOTE_SELECTOR).enumerate() {
            let message = select_raw_text(element, &MESSAGE_SELECTOR);
            let author = select_raw_text(element, &AUTHOR_SELECTOR);

            match (message, author) {
                (Some(message), Some(author)) => quotes.push(Quote { message, author }),
                (message, author) => warn!(
                    index,
                    has_message = message.is_some(),
                    has_author = author.is_some(),
                    "Skipping malformed quote element"
                ),
            }
        }

        quotes
    }

    /// Absolute URL of the next page, or `None` on the last page.
    ///
    /// A next link that cannot be resolved also ends pagination.
    pub fn next_page(&self, html: &str, current_url: &Url) -> Option<Url> {
        let document = Html::parse_document(html);
        let next = document.select(&NEXT_SELECTOR).next()?;

        let Some(href) = next
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            warn!("Next-page element on {} has no link, treating as last page", current_url);
            return None;
        };

        match current_url.join(href.trim()) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Unresolvable next link {:?} on {}: {}, treating as last page", href, current_url, e);
                None
            }
        }
    }
}

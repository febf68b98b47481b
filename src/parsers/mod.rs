pub mod imdb;
pub mod quotes;

pub use imdb::ImdbParser;
pub use quotes::QuotesParser;

use scraper::{ElementRef, Selector};

/// Clean and normalize text by collapsing runs of whitespace
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a CSS selector known at compile time.
pub(crate) fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| panic!("Invalid selector `{css}`"))
}

/// Text of the first descendant of `element` matching `selector`.
///
/// Returns `None` only when no element matches; an element with no text yields
/// an empty string.
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| clean_text(&found.text().collect::<String>()))
}

/// Like [`select_text`] but returns the text nodes exactly as written.
pub fn select_raw_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| found.text().collect::<String>())
}

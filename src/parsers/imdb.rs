use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{parse_selector, select_text};
use crate::error::{Result, ScrapeError};
use crate::models::MovieRecord;

/// One list item of the chart. Only rendered after the page's scripts ran.
pub const CONTAINER_CSS: &str = ".ipc-metadata-list-summary-item";

const TITLE_CSS: &str = ".ipc-title__text";
const RATING_CSS: &str = ".ipc-rating-star--rating";
const CLASSIFICATION_CSS: &str = ".ipc-signpost__text";

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector(TITLE_CSS));
static RATING_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector(RATING_CSS));
static CLASSIFICATION_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector(CLASSIFICATION_CSS));

/// Extracts a [`MovieRecord`] from a single chart container.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImdbParser;

impl ImdbParser {
    /// Extract from the outer HTML of one container.
    pub fn extract(container_html: &str) -> Result<MovieRecord> {
        let fragment = Html::parse_fragment(container_html);
        Self::extract_element(fragment.root_element())
    }

    /// Extract from a container already in a parsed document.
    ///
    /// Either every field is found or the container yields an error naming the
    /// first missing one.
    pub fn extract_element(container: ElementRef<'_>) -> Result<MovieRecord> {
        let full_title = required_text(container, "title", TITLE_CSS, &TITLE_SELECTOR)?;
        let rating = required_text(container, "rating", RATING_CSS, &RATING_SELECTOR)?;
        let classification = required_text(
            container,
            "classification",
            CLASSIFICATION_CSS,
            &CLASSIFICATION_SELECTOR,
        )?;

        Ok(MovieRecord {
            title: (classification, full_title),
            rating,
        })
    }
}

fn required_text(
    container: ElementRef<'_>,
    field: &'static str,
    css: &'static str,
    selector: &Selector,
) -> Result<String> {
    select_text(container, selector).ok_or(ScrapeError::MissingField {
        field,
        selector: css,
    })
}

mod imdb;
mod quotes;

pub use imdb::{ImdbScraper, ScrapeStage};
pub use quotes::QuotesScraper;

pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod scrapers;
pub mod utils;

pub use config::Config;
pub use error::{Result, ScrapeError};
pub use models::{MovieRecord, Quote};

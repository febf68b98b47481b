use anyhow::{Context, Result};
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scrapers";

#[cfg(windows)]
const DEFAULT_DRIVER_PATH: &str = "chromedriver.exe";
#[cfg(not(windows))]
const DEFAULT_DRIVER_PATH: &str = "/usr/local/bin/chromedriver";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quotes_start_url: String,
    pub movies_url: String,
    pub quotes_output: PathBuf,
    pub movies_output: PathBuf,
    pub http_timeout_secs: u64,
    /// Upper bound on pages visited by the quotes pagination loop
    pub max_pages: usize,
    pub user_agent: String,
    pub render_settle_ms: u64,
    pub render_timeout_secs: u64,
    pub headless: bool,
    pub proxy_enable: bool,
    pub proxy: Option<String>,
    /// Path to the chromedriver executable
    pub chrome_path: Option<PathBuf>,
    /// Connect to an already running WebDriver server instead of spawning one
    pub webdriver_url: Option<String>,
    pub webdriver_port: u16,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quotes_start_url: "https://quotes.toscrape.com/".to_string(),
            movies_url: "https://www.imdb.com/pt/chart/top/".to_string(),
            quotes_output: PathBuf::from("data/quotes.json"),
            movies_output: PathBuf::from("data/movies.json"),
            http_timeout_secs: 10,
            max_pages: 1000,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36".to_string(),
            render_settle_ms: 3500,
            render_timeout_secs: 10,
            headless: true,
            proxy_enable: false,
            proxy: None,
            chrome_path: None,
            webdriver_url: None,
            webdriver_port: 9515,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Load defaults, then the settings file, then environment variables.
    ///
    /// Without an explicit `path`, `scrapers.toml` (or any format the config
    /// crate recognizes under that stem) is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(Environment::default().try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn render_settle(&self) -> Duration {
        Duration::from_millis(self.render_settle_ms)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Proxy address to hand to the browser, if proxying is switched on.
    pub fn active_proxy(&self) -> Option<&str> {
        if !self.proxy_enable {
            return None;
        }
        self.proxy.as_deref().filter(|proxy| !proxy.trim().is_empty())
    }

    pub fn driver_path(&self) -> PathBuf {
        self.chrome_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DRIVER_PATH))
    }
}

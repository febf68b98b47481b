use async_trait::async_trait;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::BrowserSession;
use crate::config::Config;
use crate::error::{Result, ScrapeError};

const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_DELAY: Duration = Duration::from_millis(500);

/// Provisions headless Chrome sessions over WebDriver.
pub struct WebDriverFactory;

impl WebDriverFactory {
    /// Chrome arguments for a headless session, including the optional proxy.
    pub fn chrome_args(config: &Config) -> Vec<String> {
        let mut args = Vec::new();
        if config.headless {
            args.push("--headless".to_string());
        }
        args.extend(
            [
                "--no-sandbox",
                "--disable-dev-shm-usage",
                "--log-level=3",
                "--silent",
                "--window-size=1920,1080",
            ]
            .map(String::from),
        );
        args.push(format!("user-agent={}", config.user_agent));

        if let Some(proxy) = config.active_proxy() {
            args.push(format!("--proxy-server={}", proxy));
        }

        args
    }

    pub fn capabilities(config: &Config) -> Capabilities {
        let mut caps = Capabilities::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({
                "args": Self::chrome_args(config),
                "excludeSwitches": ["enable-logging"],
            }),
        );
        caps
    }

    /// Start (or attach to) a driver and open a Chrome session.
    pub async fn create_chrome_session(config: &Config) -> Result<WebDriverSession> {
        let (driver, webdriver_url) = match &config.webdriver_url {
            Some(url) => {
                info!("Using running WebDriver at {}", url);
                (None, url.clone())
            }
            None => {
                let path = config.driver_path();
                info!("Starting chromedriver from {}", path.display());

                let child = Command::new(&path)
                    .arg(format!("--port={}", config.webdriver_port))
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .kill_on_drop(true)
                    .spawn()
                    .map_err(|e| {
                        ScrapeError::Browser(format!(
                            "failed to start chromedriver at {}: {}",
                            path.display(),
                            e
                        ))
                    })?;

                (Some(child), format!("http://localhost:{}", config.webdriver_port))
            }
        };

        if config.active_proxy().is_some() {
            info!("Browser traffic routed through proxy");
        }

        let client = connect_with_retry(&webdriver_url, Self::capabilities(config)).await?;

        Ok(WebDriverSession { client, driver })
    }
}

async fn connect_with_retry(url: &str, caps: Capabilities) -> Result<Client> {
    let mut attempt = 1;

    loop {
        match ClientBuilder::native()
            .capabilities(caps.clone())
            .connect(url)
            .await
        {
            Ok(client) => return Ok(client),
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                debug!("WebDriver not ready (attempt {}/{}): {}", attempt, CONNECT_ATTEMPTS, e);
                attempt += 1;
                sleep(CONNECT_DELAY).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// A Chrome session plus the driver process backing it, if we spawned one.
pub struct WebDriverSession {
    client: Client,
    // Killed on drop.
    driver: Option<Child>,
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .map_err(|e| match e {
                fantoccini::error::CmdError::WaitTimeout => ScrapeError::RenderTimeout {
                    selector: selector.to_string(),
                    timeout,
                },
                other => other.into(),
            })?;
        Ok(())
    }

    async fn find_all(&mut self, selector: &str) -> Result<Vec<Result<String>>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;

        let mut html = Vec::with_capacity(elements.len());
        for element in elements {
            html.push(element.html(false).await.map_err(ScrapeError::from));
        }
        Ok(html)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let WebDriverSession { client, driver } = *self;
        let closed = client.close().await;

        if let Some(mut driver) = driver {
            if let Err(e) = driver.kill().await {
                warn!("Failed to stop chromedriver: {}", e);
            }
        }

        closed.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_args_without_proxy() {
        let args = WebDriverFactory::chrome_args(&Config::default());

        assert_eq!(args[0], "--headless");
        assert!(args.contains(&"--window-size=1920,1080".to_string()));
        assert!(args.iter().any(|a| a.starts_with("user-agent=Mozilla/5.0")));
        assert!(!args.iter().any(|a| a.starts_with("--proxy-server")));
    }

    #[test]
    fn proxy_arg_added_when_enabled() {
        let config = Config {
            proxy_enable: true,
            proxy: Some("http://10.0.0.1:3128".to_string()),
            ..Config::default()
        };
        let args = WebDriverFactory::chrome_args(&config);

        assert_eq!(args.last().map(String::as_str), Some("--proxy-server=http://10.0.0.1:3128"));
    }

    #[test]
    fn capabilities_carry_chrome_options() {
        let caps = WebDriverFactory::capabilities(&Config::default());
        let options = &caps["goog:chromeOptions"];

        assert_eq!(options["excludeSwitches"], json!(["enable-logging"]));
        assert!(options["args"].as_array().unwrap().contains(&json!("--no-sandbox")));
    }
}

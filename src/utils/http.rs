use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::Result;

/// Source of raw page HTML for the pagination loop.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String>;
}

#[async_trait]
impl<'a, T: PageFetcher + ?Sized> PageFetcher for &'a T {
    async fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url).await
    }
}

pub fn create_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Plain HTTP fetcher: one GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_client(&config.user_agent, config.http_timeout())?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn get(&self, url: &Url) -> Result<String> {
        debug!("HTTP GET: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}

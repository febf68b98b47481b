#![allow(dead_code)]

use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use web_scrapers::browser::BrowserSession;
use web_scrapers::error::{Result, ScrapeError};

/// In-memory sink for tracing output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Install a subscriber writing to this buffer for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// What a [`FakeSession`] was asked to do.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub navigated: Vec<String>,
    pub waited_for: Vec<String>,
    pub closed: bool,
}

/// Scripted browser session serving a fixed set of rendered containers.
pub struct FakeSession {
    pub containers: Vec<String>,
    pub fail_navigation: bool,
    pub never_renders: bool,
    /// Indices of containers whose HTML cannot be read
    pub unreadable: Vec<usize>,
    pub log: Arc<Mutex<SessionLog>>,
}

impl FakeSession {
    pub fn rendering(containers: Vec<String>) -> (Self, Arc<Mutex<SessionLog>>) {
        let log = Arc::new(Mutex::new(SessionLog::default()));
        let session = Self {
            containers,
            fail_navigation: false,
            never_renders: false,
            unreadable: Vec::new(),
            log: log.clone(),
        };
        (session, log)
    }
}

#[async_trait]
impl BrowserSession for FakeSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.log.lock().unwrap().navigated.push(url.to_string());
        if self.fail_navigation {
            return Err(ScrapeError::Browser("net::ERR_NAME_NOT_RESOLVED".to_string()));
        }
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        self.log.lock().unwrap().waited_for.push(selector.to_string());
        if self.never_renders || self.containers.is_empty() {
            return Err(ScrapeError::RenderTimeout {
                selector: selector.to_string(),
                timeout,
            });
        }
        Ok(())
    }

    async fn find_all(&mut self, _selector: &str) -> Result<Vec<Result<String>>> {
        Ok(self
            .containers
            .iter()
            .enumerate()
            .map(|(index, html)| {
                if self.unreadable.contains(&index) {
                    Err(ScrapeError::Browser("stale element reference".to_string()))
                } else {
                    Ok(html.clone())
                }
            })
            .collect())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.log.lock().unwrap().closed = true;
        Ok(())
    }
}

/// Rendered chart item; `None` leaves the corresponding element out.
pub fn movie_container(title: &str, rating: Option<&str>, classification: Option<&str>) -> String {
    let rating = rating
        .map(|r| format!(r#"<span class="ipc-rating-star--rating">{r}</span>"#))
        .unwrap_or_default();
    let classification = classification
        .map(|c| format!(r#"<span class="ipc-signpost__text">{c}</span>"#))
        .unwrap_or_default();

    format!(
        r#"<li class="ipc-metadata-list-summary-item"><h3 class="ipc-title__text">{title}</h3>{classification}{rating}</li>"#
    )
}

/// A quotes listing page with an optional next link.
pub fn quotes_page(quotes: &[(&str, &str)], next: Option<&str>) -> String {
    let items: String = quotes
        .iter()
        .map(|(text, author)| {
            format!(
                r#"<div class="quote"><span class="text">{text}</span><span>by <small class="author">{author}</small></span></div>"#
            )
        })
        .collect();
    let pager = next
        .map(|href| {
            format!(r#"<nav><ul class="pager"><li class="next"><a href="{href}">Next <span aria-hidden="true">&rarr;</span></a></li></ul></nav>"#)
        })
        .unwrap_or_default();

    format!(r#"<!DOCTYPE html><html><body><div class="container">{items}{pager}</div></body></html>"#)
}

//! HTTP-backed navigator implementation
//!
//! This navigator loads pages with a plain GET and parses the retained body
//! on demand for element queries. It keeps exactly one page loaded at a time
//! and performs no retries; a failed load surfaces immediately as a
//! `NavigationError` for the caller to classify as fatal or per-target.

use crate::config::HttpConfig;
use crate::navigator::{ElementHandle, Navigator, SelectorSpec};
use crate::{NavigationError, PageStructureError};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with the configured user agent and timeouts
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// The page currently loaded in the navigator
#[derive(Debug, Clone)]
struct LoadedPage {
    url: Url,
    body: String,
}

/// Navigator backed by an HTTP client and an HTML parser
#[derive(Debug)]
pub struct HttpNavigator {
    client: Client,
    current: Option<LoadedPage>,
}

impl HttpNavigator {
    /// Creates a navigator from an already-built HTTP client
    pub fn new(client: Client) -> Self {
        HttpNavigator {
            client,
            current: None,
        }
    }

    /// Creates a navigator from an HTTP configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self, NavigationError> {
        let client = build_http_client(config)?;
        Ok(Self::new(client))
    }

    /// Parses the retained body and snapshots every selector match
    fn select_all(&self, selector: &SelectorSpec) -> Result<Vec<ElementHandle>, PageStructureError> {
        let page = self.current.as_ref().ok_or(PageStructureError::NoPage)?;

        let css = selector.to_css();
        let parsed = Selector::parse(&css).map_err(|_| PageStructureError::BadSelector {
            selector: css.clone(),
        })?;

        let document = Html::parse_document(&page.body);
        Ok(document
            .select(&parsed)
            .map(ElementHandle::from_element)
            .collect())
    }
}

#[async_trait]
impl Navigator for HttpNavigator {
    async fn navigate(&mut self, url: &Url) -> Result<(), NavigationError> {
        // A fresh navigation invalidates the previous page even on failure
        self.current = None;

        tracing::debug!("Navigating to {}", url);
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                NavigationError::Timeout {
                    url: url.to_string(),
                }
            } else {
                NavigationError::Http {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavigationError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Accept HTML or responses that do not declare a content type
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.is_empty()
            && !content_type.contains("text/html")
            && !content_type.contains("application/xhtml")
        {
            return Err(NavigationError::NotHtml {
                url: url.to_string(),
                content_type,
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|e| NavigationError::Http {
            url: url.to_string(),
            source: e,
        })?;

        self.current = Some(LoadedPage {
            url: final_url,
            body,
        });
        Ok(())
    }

    fn current_url(&self) -> Option<&Url> {
        self.current.as_ref().map(|page| &page.url)
    }

    fn find_single(&self, selector: &SelectorSpec) -> Result<ElementHandle, PageStructureError> {
        let mut matches = self.select_all(selector)?;
        let url = self
            .current_url()
            .map(|u| u.to_string())
            .unwrap_or_default();

        match matches.len() {
            0 => Err(PageStructureError::NotFound {
                selector: selector.to_string(),
                url,
            }),
            1 => Ok(matches.remove(0)),
            count => Err(PageStructureError::Ambiguous {
                selector: selector.to_string(),
                url,
                count,
            }),
        }
    }

    fn find_many(&self, selector: &SelectorSpec) -> Result<Vec<ElementHandle>, PageStructureError> {
        self.select_all(selector)
    }
}

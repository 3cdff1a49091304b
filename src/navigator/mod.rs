//! Navigator module: the seam between extraction logic and page loading
//!
//! The extractors never talk to the network directly; they drive a
//! `Navigator`, which opens one URL at a time and answers element queries.
//! `HttpNavigator` is the production implementation (reqwest + scraper).

mod element;
mod http;
mod selector;

pub use element::ElementHandle;
pub use http::{build_http_client, HttpNavigator};
pub use selector::SelectorSpec;

use crate::{NavigationError, PageStructureError};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Page navigation and element lookup, one page loaded at a time
#[async_trait]
pub trait Navigator: Send {
    /// Loads the given URL, replacing any previously loaded page
    async fn navigate(&mut self, url: &Url) -> Result<(), NavigationError>;

    /// The URL of the currently loaded page, if any
    fn current_url(&self) -> Option<&Url>;

    /// Finds exactly one element; zero or multiple matches are errors
    fn find_single(&self, selector: &SelectorSpec) -> Result<ElementHandle, PageStructureError>;

    /// Finds all matching elements; an empty result is not an error
    fn find_many(&self, selector: &SelectorSpec) -> Result<Vec<ElementHandle>, PageStructureError>;

    /// Waits until at least one element matches the selector
    ///
    /// Polls `find_many` at `poll_interval` until `timeout` has elapsed.
    /// This replaces fixed sleep-based load waits with a readiness condition
    /// on the element the caller actually needs.
    async fn wait_until_present(
        &mut self,
        selector: &SelectorSpec,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<(), PageStructureError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            match self.find_many(selector) {
                Ok(matches) if !matches.is_empty() => return Ok(()),
                Ok(_) => {}
                Err(e) => return Err(e),
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(PageStructureError::NeverAppeared {
                    selector: selector.to_string(),
                    url: self
                        .current_url()
                        .map(|u| u.to_string())
                        .unwrap_or_default(),
                    waited_ms: timeout.as_millis() as u64,
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}

/// In-memory navigator for exercising extraction logic in tests
#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use std::collections::HashMap;

    /// Serves fixed page bodies keyed by URL, without any network access
    pub(crate) struct StaticNavigator {
        pages: HashMap<Url, String>,
        current: Option<Url>,
    }

    impl StaticNavigator {
        pub(crate) fn new() -> Self {
            StaticNavigator {
                pages: HashMap::new(),
                current: None,
            }
        }

        pub(crate) fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages
                .insert(Url::parse(url).expect("bad test URL"), body.to_string());
            self
        }
    }

    #[async_trait]
    impl Navigator for StaticNavigator {
        async fn navigate(&mut self, url: &Url) -> Result<(), NavigationError> {
            self.current = None;
            if self.pages.contains_key(url) {
                self.current = Some(url.clone());
                Ok(())
            } else {
                Err(NavigationError::BadStatus {
                    url: url.to_string(),
                    status: 404,
                })
            }
        }

        fn current_url(&self) -> Option<&Url> {
            self.current.as_ref()
        }

        fn find_single(
            &self,
            selector: &SelectorSpec,
        ) -> Result<ElementHandle, PageStructureError> {
            let url = self
                .current_url()
                .map(|u| u.to_string())
                .unwrap_or_default();
            let mut matches = self.find_many(selector)?;
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

        fn find_many(
            &self,
            selector: &SelectorSpec,
        ) -> Result<Vec<ElementHandle>, PageStructureError> {
            let url = self.current.as_ref().ok_or(PageStructureError::NoPage)?;
            let body = &self.pages[url];
            let html = scraper::Html::parse_document(body);
            let sel = scraper::Selector::parse(&selector.to_css()).map_err(|_| {
                PageStructureError::BadSelector {
                    selector: selector.to_string(),
                }
            })?;
            Ok(html.select(&sel).map(ElementHandle::from_element).collect())
        }
    }
}

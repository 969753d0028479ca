//! HTTP fetcher
//!
//! One GET per page over a client shared by the whole crawl. The client
//! carries the user agent and timeout policy and follows redirects, so a
//! fetched page keeps the URL it was requested under. Every failure mode is
//! classified into a [`FetchError`]; the caller decides what a failed page
//! means for the crawl.

use crate::config::CrawlerConfig;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by a crawl
///
/// # Arguments
///
/// * `config` - The crawler configuration holding user agent and timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page body
///
/// Sends one GET request and reads the body to completion. Non-2xx statuses,
/// timeouts, transport errors, and body read errors all come back as typed
/// [`FetchError`] values; this function never panics on a bad page.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - The classified failure
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult<String> {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) if e.is_timeout() => {
            return Err(FetchError::Timeout {
                url: url.to_string(),
            });
        }
        Err(e) => {
            return Err(FetchError::Request {
                url: url.to_string(),
                source: e,
            });
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    match response.text().await {
        Ok(body) => Ok(body),
        Err(e) if e.is_timeout() => Err(FetchError::Timeout {
            url: url.to_string(),
        }),
        Err(e) => Err(FetchError::Body {
            url: url.to_string(),
            source: e,
        }),
    }
}

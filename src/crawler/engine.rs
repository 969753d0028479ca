//! Traversal engine
//!
//! The depth-first crawl loop: an explicit work-list of candidate URLs,
//! a visited set keyed by resolved URL, a same-origin check against the
//! seed's hostname, and an optional page-count ceiling. Links are pushed in
//! reverse page order so the pop order matches a recursive left-to-right
//! descent.

use crate::config::CrawlerConfig;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::url::{is_valid, CrawlTarget};
use crate::{CrawlError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// One successfully fetched page
///
/// Created only for URLs that passed validation and whose fetch succeeded,
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Concatenated text of the page's content elements
    pub content: String,

    /// The URL the page was fetched under
    pub source: String,
}

/// Counters describing what a crawl did
///
/// Diagnostic only; the page records are the crawl's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Fetch attempts that failed (status, transport, timeout, body)
    pub fetch_failures: u64,

    /// Hrefs discovered across all fetched pages
    pub links_discovered: u64,

    /// Candidates dropped by validation or unresolvable hrefs
    pub invalid_links: u64,

    /// Candidates dropped for pointing off the crawl's hostname
    pub cross_origin_skipped: u64,

    /// Candidates dropped because their URL was already visited
    pub revisits_skipped: u64,
}

/// Everything a finished crawl produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Page records in visitation order
    pub pages: Vec<PageRecord>,

    /// Counters for the whole crawl
    pub stats: CrawlStats,
}

/// Fetches one page and extracts its links and content
///
/// The per-page half of a crawl step, usable on its own. One GET, then link
/// and content extraction over the body. A fetch failure is logged and
/// yields no record and no links; it is never fatal.
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch with
/// * `url` - The absolute URL of the page
/// * `content_selector` - CSS selector choosing the content elements
///
/// # Returns
///
/// The page's outbound hrefs as written in its HTML, and the page record if
/// the fetch succeeded.
pub async fn fetch_and_extract(
    client: &Client,
    url: &Url,
    content_selector: &str,
) -> (Vec<String>, Option<PageRecord>) {
    let body = match fetch_page(client, url.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Fetch failed: {}", e);
            return (Vec::new(), None);
        }
    };

    let extracted = extract_page(&body, content_selector);
    let record = PageRecord {
        content: extracted.content,
        source: url.to_string(),
    };

    (extracted.links, Some(record))
}

/// Depth-first same-origin crawler
///
/// Holds the HTTP client and configuration. All per-crawl state (visited
/// set, work-list, collected pages) lives inside [`Crawler::crawl`], so one
/// crawler can run any number of crawls.
pub struct Crawler {
    client: Client,
    config: CrawlerConfig,
}

impl Crawler {
    /// Creates a crawler from a configuration
    ///
    /// The configuration is validated first, so a bad content selector or
    /// incoherent chunk sizes surface here rather than mid-crawl.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(CrawlError)` - Invalid configuration or client build failure
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        config.validate()?;
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// The configuration this crawler runs with
    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Crawls the site the seed belongs to
    ///
    /// Visits pages depth-first starting at the seed, following each page's
    /// links in page order and never leaving the seed's hostname. A URL is
    /// visited at most once per crawl; it is marked visited before its fetch
    /// is attempted, so a failing URL is not retried. Fetch failures cost
    /// the page its record but never the crawl.
    ///
    /// When `max_pages` is nonzero the traversal stops as soon as that many
    /// records have been collected; `0` means unbounded.
    ///
    /// # Arguments
    ///
    /// * `seed` - The URL the crawl starts from
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Records in visitation order plus counters
    /// * `Err(CrawlError::InvalidSeed)` - The seed failed validation; no
    ///   request was made
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport> {
        if !is_valid(seed) {
            return Err(CrawlError::InvalidSeed(seed.to_string()));
        }

        let seed_url =
            Url::parse(seed).map_err(|_| CrawlError::InvalidSeed(seed.to_string()))?;
        let target = CrawlTarget::from_url(&seed_url)
            .ok_or_else(|| CrawlError::InvalidSeed(seed.to_string()))?;

        tracing::info!("Starting crawl of {} from {}", target.host(), seed);

        let mut visited: HashSet<String> = HashSet::new();
        let mut pages: Vec<PageRecord> = Vec::new();
        let mut stats = CrawlStats::default();

        // LIFO work-list of absolute URL strings
        let mut pending: Vec<String> = vec![seed.to_string()];

        while let Some(candidate) = pending.pop() {
            if !is_valid(&candidate) {
                tracing::debug!("Skipping invalid URL: {}", candidate);
                stats.invalid_links += 1;
                continue;
            }

            let url = match Url::parse(&candidate) {
                Ok(u) => u,
                Err(_) => {
                    stats.invalid_links += 1;
                    continue;
                }
            };

            if !target.matches(&url) {
                tracing::trace!("Skipping cross-origin URL: {}", url);
                stats.cross_origin_skipped += 1;
                continue;
            }

            // Check-and-insert in one step; marking before the fetch means a
            // URL gets exactly one attempt per crawl even when it fails
            if !visited.insert(url.to_string()) {
                tracing::trace!("Already visited: {}", url);
                stats.revisits_skipped += 1;
                continue;
            }

            let (links, record) =
                fetch_and_extract(&self.client, &url, &self.config.content_selector).await;

            let record = match record {
                Some(r) => r,
                None => {
                    stats.fetch_failures += 1;
                    continue;
                }
            };

            tracing::debug!(
                "Visited {} ({} links, {} content bytes)",
                url,
                links.len(),
                record.content.len()
            );

            stats.pages_fetched += 1;
            stats.links_discovered += links.len() as u64;
            pages.push(record);

            if self.config.max_pages > 0 && pages.len() >= self.config.max_pages {
                tracing::info!("Reached page limit of {}", self.config.max_pages);
                break;
            }

            // Resolve hrefs against the page they were found on, then push
            // in reverse so the leftmost link is crawled first
            let mut resolved: Vec<String> = Vec::with_capacity(links.len());
            for href in &links {
                match url.join(href) {
                    Ok(next) => resolved.push(next.to_string()),
                    Err(e) => {
                        tracing::debug!("Cannot resolve href {:?} on {}: {}", href, url, e);
                        stats.invalid_links += 1;
                    }
                }
            }
            pending.extend(resolved.into_iter().rev());
        }

        tracing::info!(
            "Crawl finished: {} pages collected, {} fetch failures",
            stats.pages_fetched,
            stats.fetch_failures
        );

        Ok(CrawlReport { pages, stats })
    }
}

/// Crawls a site with default settings and a page limit
///
/// Convenience wrapper for callers that only want the records: builds a
/// default configuration with the given ceiling, runs one crawl, and
/// returns the pages in visitation order. A ceiling of `0` crawls without
/// limit.
///
/// # Arguments
///
/// * `seed` - The URL the crawl starts from
/// * `max_pages` - Page-count ceiling, `0` for unlimited
///
/// # Example
///
/// ```no_run
/// use site_harvest::crawler::crawl_site;
///
/// # async fn example() -> site_harvest::Result<()> {
/// let pages = crawl_site("https://example.com/docs", 25).await?;
/// for page in &pages {
///     println!("{}: {} bytes", page.source, page.content.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl_site(seed: &str, max_pages: usize) -> Result<Vec<PageRecord>> {
    let config = CrawlerConfig {
        max_pages,
        ..CrawlerConfig::default()
    };

    let crawler = Crawler::new(config)?;
    let report = crawler.crawl(seed).await?;
    Ok(report.pages)
}

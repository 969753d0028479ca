//! Crawler module for fetching and traversing a site
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with typed failure classification
//! - Link and content extraction from HTML
//! - The depth-first same-origin traversal

mod engine;
mod extractor;
mod fetcher;

pub use engine::{crawl_site, fetch_and_extract, CrawlReport, CrawlStats, Crawler, PageRecord};
pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page};

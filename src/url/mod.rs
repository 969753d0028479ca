//! URL handling for Site-Harvest
//!
//! This module decides which candidate link strings are crawlable at all
//! (validation) and which of those belong to the site being crawled
//! (same-origin check against the seed's hostname).

mod origin;
mod validate;

// Re-export main types and functions
pub use origin::CrawlTarget;
pub use validate::is_valid;

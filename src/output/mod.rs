//! Output module for crawl results
//!
//! This module handles:
//! - Writing page records and text chunks as JSON Lines
//! - Printing a human-readable summary of the crawl counters

mod jsonl;
mod summary;

pub use jsonl::{write_chunks_jsonl, write_pages_jsonl};
pub use summary::print_summary;

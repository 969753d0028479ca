//! Configuration module for Site-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a default, so configuration files only name what
//! they change.
//!
//! Validation rules: timeouts must be nonzero, the content selector must
//! parse as a CSS selector, the user agent must be a non-empty header-safe
//! string, and the chunk overlap must be smaller than the chunk size.
//!
//! # Example
//!
//! ```no_run
//! use site_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::CrawlerConfig;

// Re-export parser functions
pub use parser::load_config;

//! Text chunking
//!
//! Splits page content into fixed-size overlapping character windows, the
//! shape a retrieval index ingests. Windows advance by
//! `chunk_size - chunk_overlap` characters, boundaries always fall on
//! `char` boundaries, and the final partial window is kept.

use crate::crawler::PageRecord;
use serde::{Deserialize, Serialize};

/// Chunking parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    /// Window length in characters
    #[serde(rename = "chunk-size")]
    pub chunk_size: usize,

    /// Characters shared between consecutive windows
    #[serde(rename = "chunk-overlap")]
    pub chunk_overlap: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 20,
        }
    }
}

/// One window of a page's content, carrying its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The window's text
    pub text: String,

    /// URL of the page the text came from
    pub source: String,

    /// Zero-based window index within the page
    pub position: usize,
}

/// Splits one page record into overlapping chunks
///
/// Every character of the content lands in at least one chunk, consecutive
/// chunks share exactly `chunk_overlap` characters, and positions count up
/// from 0 in content order. Empty content yields no chunks, as does a
/// `chunk_size` of zero; options coming from configuration are validated
/// before a crawl starts.
///
/// # Arguments
///
/// * `record` - The page whose content is split
/// * `options` - Window length and overlap
///
/// # Example
///
/// ```
/// use site_harvest::chunk::{chunk_page, ChunkOptions};
/// use site_harvest::crawler::PageRecord;
///
/// let record = PageRecord {
///     content: "abcdefgh".to_string(),
///     source: "https://example.com/".to_string(),
/// };
/// let options = ChunkOptions { chunk_size: 5, chunk_overlap: 2 };
///
/// let chunks = chunk_page(&record, &options);
/// assert_eq!(chunks[0].text, "abcde");
/// assert_eq!(chunks[1].text, "defgh");
/// ```
pub fn chunk_page(record: &PageRecord, options: &ChunkOptions) -> Vec<TextChunk> {
    if options.chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = record.content.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    // A degenerate overlap still advances by at least one character
    let stride = options
        .chunk_size
        .saturating_sub(options.chunk_overlap)
        .max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut position = 0;

    while start < chars.len() {
        let end = (start + options.chunk_size).min(chars.len());
        chunks.push(TextChunk {
            text: chars[start..end].iter().collect(),
            source: record.source.clone(),
            position,
        });

        if end == chars.len() {
            break;
        }
        start += stride;
        position += 1;
    }

    chunks
}

/// Splits a batch of page records
///
/// Chunks come back in page order, windows in content order within each
/// page; each chunk keeps its own page's source URL.
pub fn chunk_pages(records: &[PageRecord], options: &ChunkOptions) -> Vec<TextChunk> {
    records
        .iter()
        .flat_map(|record| chunk_page(record, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> PageRecord {
        PageRecord {
            content: content.to_string(),
            source: "https://example.com/page".to_string(),
        }
    }

    #[test]
    fn test_empty_content_yields_no_chunks() {
        let chunks = chunk_page(&record(""), &ChunkOptions::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_content_is_one_chunk() {
        let chunks = chunk_page(&record("hello"), &ChunkOptions::default());
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello");
        assert_eq!(chunks[0].position, 0);
        assert_eq!(chunks[0].source, "https://example.com/page");
    }

    #[test]
    fn test_content_of_exactly_chunk_size() {
        let options = ChunkOptions {
            chunk_size: 5,
            chunk_overlap: 2,
        };
        let chunks = chunk_page(&record("abcde"), &options);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "abcde");
    }

    #[test]
    fn test_windows_advance_by_stride() {
        let options = ChunkOptions {
            chunk_size: 5,
            chunk_overlap: 2,
        };
        let chunks = chunk_page(&record("abcdefgh"), &options);

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcde", "defgh"]);

        let positions: Vec<usize> = chunks.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let options = ChunkOptions {
            chunk_size: 5,
            chunk_overlap: 2,
        };
        let chunks = chunk_page(&record("abcdefghijk"), &options);

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            let tail: String = prev[prev.len() - 2..].iter().collect();
            let head: String = next[..2].iter().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_final_partial_window_kept() {
        let options = ChunkOptions {
            chunk_size: 5,
            chunk_overlap: 2,
        };
        let chunks = chunk_page(&record("abcdef"), &options);

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcde", "def"]);
    }

    #[test]
    fn test_every_character_covered() {
        let options = ChunkOptions {
            chunk_size: 7,
            chunk_overlap: 3,
        };
        let content = "the quick brown fox jumps over the lazy dog";
        let chunks = chunk_page(&record(content), &options);

        let mut rebuilt = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                rebuilt.push_str(&chunk.text);
            } else {
                let fresh: String = chunk.text.chars().skip(options.chunk_overlap).collect();
                rebuilt.push_str(&fresh);
            }
            assert_eq!(chunk.position, i);
        }
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn test_multibyte_characters_never_split() {
        let options = ChunkOptions {
            chunk_size: 3,
            chunk_overlap: 1,
        };
        let chunks = chunk_page(&record("αβγδε"), &options);

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["αβγ", "γδε"]);
    }

    #[test]
    fn test_zero_chunk_size_yields_no_chunks() {
        let options = ChunkOptions {
            chunk_size: 0,
            chunk_overlap: 0,
        };
        assert!(chunk_page(&record("abc"), &options).is_empty());
    }

    #[test]
    fn test_degenerate_overlap_still_terminates() {
        let options = ChunkOptions {
            chunk_size: 3,
            chunk_overlap: 10,
        };
        let chunks = chunk_page(&record("abcdef"), &options);
        assert!(!chunks.is_empty());
        assert!(chunks.len() <= 6);
    }

    #[test]
    fn test_chunk_pages_keeps_page_order_and_sources() {
        let records = vec![
            PageRecord {
                content: "abcdefgh".to_string(),
                source: "https://example.com/a".to_string(),
            },
            PageRecord {
                content: "xyz".to_string(),
                source: "https://example.com/b".to_string(),
            },
        ];
        let options = ChunkOptions {
            chunk_size: 5,
            chunk_overlap: 2,
        };

        let chunks = chunk_pages(&records, &options);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].source, "https://example.com/a");
        assert_eq!(chunks[1].source, "https://example.com/a");
        assert_eq!(chunks[2].source, "https://example.com/b");
        assert_eq!(chunks[2].text, "xyz");
        assert_eq!(chunks[2].position, 0);
    }

    #[test]
    fn test_default_options() {
        let options = ChunkOptions::default();
        assert_eq!(options.chunk_size, 1000);
        assert_eq!(options.chunk_overlap, 20);
    }
}

//! JSON Lines writers
//!
//! One serialized object per line, the hand-off format for external
//! embedding and indexing tools.

use crate::chunk::TextChunk;
use crate::crawler::PageRecord;
use std::io::{self, Write};

/// Writes page records as JSON Lines
///
/// One object per line, in input order. The writer is not flushed; the
/// caller owns buffering.
///
/// # Arguments
///
/// * `writer` - Destination for the serialized lines
/// * `pages` - The records to write
pub fn write_pages_jsonl<W: Write>(writer: &mut W, pages: &[PageRecord]) -> io::Result<()> {
    for page in pages {
        serde_json::to_writer(&mut *writer, page)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes text chunks as JSON Lines
///
/// # Arguments
///
/// * `writer` - Destination for the serialized lines
/// * `chunks` - The chunks to write
pub fn write_chunks_jsonl<W: Write>(writer: &mut W, chunks: &[TextChunk]) -> io::Result<()> {
    for chunk in chunks {
        serde_json::to_writer(&mut *writer, chunk)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pages_one_object_per_line() {
        let pages = vec![
            PageRecord {
                content: "first".to_string(),
                source: "https://example.com/".to_string(),
            },
            PageRecord {
                content: "second".to_string(),
                source: "https://example.com/two".to_string(),
            },
        ];

        let mut buf: Vec<u8> = Vec::new();
        write_pages_jsonl(&mut buf, &pages).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: PageRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, pages[0]);
        let second: PageRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second, pages[1]);
    }

    #[test]
    fn test_write_chunks_round_trips_fields() {
        let chunks = vec![TextChunk {
            text: "some window".to_string(),
            source: "https://example.com/doc".to_string(),
            position: 3,
        }];

        let mut buf: Vec<u8> = Vec::new();
        write_chunks_jsonl(&mut buf, &chunks).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let parsed: TextChunk = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, chunks[0]);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut buf: Vec<u8> = Vec::new();
        write_pages_jsonl(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());

        write_chunks_jsonl(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_content_with_newlines_stays_on_one_line() {
        let pages = vec![PageRecord {
            content: "line one\nline two".to_string(),
            source: "https://example.com/".to_string(),
        }];

        let mut buf: Vec<u8> = Vec::new();
        write_pages_jsonl(&mut buf, &pages).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

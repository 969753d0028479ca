//! HTML analysis
//!
//! Link and content extraction over a parsed document. Everything here is
//! synchronous; `scraper::Html` is not `Send`, so a document never outlives
//! the function that parsed it.

use scraper::{Html, Selector};

/// Links and text pulled from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Every anchor href as written in the page, minus fragment links
    pub links: Vec<String>,

    /// Concatenated text of the elements matching the content selector
    pub content: String,
}

/// Extracts links and content from an HTML body in one pass
///
/// # Link Extraction Rules
///
/// Every `<a href="...">` value is collected exactly as it appears in the
/// page, relative or absolute; resolving hrefs against the page URL is the
/// traversal's job. An href containing `#` anywhere is dropped, so in-page
/// anchors never surface as crawl candidates.
///
/// # Content Extraction Rules
///
/// The text of every element matching `content_selector` is concatenated in
/// document order with no separator. Nested matches contribute their text
/// once per match, so a `div` inside another `div` shows up twice under the
/// default `div` selector.
///
/// # Arguments
///
/// * `html` - The raw page body
/// * `content_selector` - CSS selector choosing the content elements
///
/// # Example
///
/// ```
/// use site_harvest::crawler::extract_page;
///
/// let html = r##"<div>Intro</div><a href="/next">Next</a><a href="#top">Top</a>"##;
/// let page = extract_page(html, "div");
/// assert_eq!(page.links, vec!["/next"]);
/// assert_eq!(page.content, "Intro");
/// ```
pub fn extract_page(html: &str, content_selector: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        links: collect_hrefs(&document),
        content: collect_text(&document, content_selector),
    }
}

/// Collects anchor hrefs in document order, dropping fragment links
fn collect_hrefs(document: &Html) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.contains('#'))
        .map(|href| href.to_string())
        .collect()
}

/// Concatenates the text of every element matching the selector
///
/// An unparseable selector yields empty content; selectors coming from
/// configuration are checked before a crawl starts.
fn collect_text(document: &Html, content_selector: &str) -> String {
    let selector = match Selector::parse(content_selector) {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let mut content = String::new();
    for element in document.select(&selector) {
        for piece in element.text() {
            content.push_str(piece);
        }
    }
    content
}

use url::Url;

/// The origin a crawl is confined to
///
/// Captured once from the seed URL when a crawl starts and never changed
/// afterwards. Two URLs share an origin when their hostnames are equal;
/// scheme and port differences do not matter, so `http://example.com:8080/a`
/// and `https://example.com/b` belong to the same crawl target.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_harvest::url::CrawlTarget;
///
/// let seed = Url::parse("https://example.com/").unwrap();
/// let target = CrawlTarget::from_url(&seed).unwrap();
///
/// assert!(target.matches(&Url::parse("http://example.com:8080/page").unwrap()));
/// assert!(!target.matches(&Url::parse("https://other.org/page").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    host: String,
}

impl CrawlTarget {
    /// Captures the hostname of a URL as the crawl target
    ///
    /// Returns `None` if the URL has no host (opaque URLs such as `mailto:`).
    pub fn from_url(url: &Url) -> Option<CrawlTarget> {
        url.host_str().map(|h| CrawlTarget {
            host: h.to_lowercase(),
        })
    }

    /// Returns true if the URL's hostname equals the target hostname
    pub fn matches(&self, url: &Url) -> bool {
        url.host_str()
            .map_or(false, |h| h.eq_ignore_ascii_case(&self.host))
    }

    /// The hostname this crawl is confined to
    pub fn host(&self) -> &str {
        &self.host
    }
}

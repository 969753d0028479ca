use url::Url;

/// Checks whether a URL string is crawlable
///
/// A candidate is judged on its resolved form: the URL is parsed and then
/// joined against `"/"`, which collapses the path to the site root while
/// keeping scheme and host intact. The resolved form must have a non-empty
/// scheme, a non-empty host, a non-empty path, and a host consisting of at
/// least two dot-separated labels.
///
/// The function is a pure predicate: every failure mode (relative reference,
/// missing scheme, opaque URLs like `mailto:`, garbage input) yields `false`,
/// never an error.
///
/// # Arguments
///
/// * `url` - The candidate URL string
///
/// # Returns
///
/// `true` if the candidate can serve as a crawl entry point
///
/// # Examples
///
/// ```
/// use site_harvest::url::is_valid;
///
/// assert!(is_valid("https://example.com/docs/page"));
/// assert!(is_valid("http://example.com"));
/// assert!(!is_valid("/docs/page"));
/// assert!(!is_valid("http://localhost/admin"));
/// ```
pub fn is_valid(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return false,
    };

    // Opaque URLs (mailto:, data:, ...) cannot be joined and are rejected here
    let root = match parsed.join("/") {
        Ok(u) => u,
        Err(_) => return false,
    };

    let host = match root.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return false,
    };

    !root.scheme().is_empty() && !root.path().is_empty() && host.split('.').count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_https_url() {
        assert!(is_valid("https://example.com/page"));
    }

    #[test]
    fn test_absolute_http_url() {
        assert!(is_valid("http://example.com/page"));
    }

    #[test]
    fn test_url_without_path_gains_root() {
        assert!(is_valid("http://example.com"));
    }

    #[test]
    fn test_root_path() {
        assert!(is_valid("https://example.com/"));
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(!is_valid("/docs/page"));
        assert!(!is_valid("docs/page"));
        assert!(!is_valid("../up"));
    }

    #[test]
    fn test_scheme_less_rejected() {
        assert!(!is_valid("example.com/page"));
        assert!(!is_valid("//example.com/page"));
    }

    #[test]
    fn test_single_label_host_rejected() {
        assert!(!is_valid("http://localhost/admin"));
        assert!(!is_valid("http://intranet"));
    }

    #[test]
    fn test_subdomain_host_accepted() {
        assert!(is_valid("https://docs.example.com/intro"));
    }

    #[test]
    fn test_non_http_scheme_accepted() {
        // The predicate checks URL shape, not fetchability
        assert!(is_valid("ftp://a.b/c"));
    }

    #[test]
    fn test_opaque_urls_rejected() {
        assert!(!is_valid("mailto:user@example.com"));
        assert!(!is_valid("data:text/plain,hello"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!is_valid("not a url"));
        assert!(!is_valid(""));
        assert!(!is_valid("http://"));
    }

    #[test]
    fn test_port_does_not_break_label_count() {
        assert!(is_valid("http://example.com:8080/page"));
    }

    #[test]
    fn test_ipv4_host_accepted() {
        assert!(is_valid("http://127.0.0.1/index.html"));
        assert!(is_valid("http://127.0.0.1:9090/"));
    }

    #[test]
    fn test_ipv6_host_rejected() {
        // Bracketed IPv6 hosts have no dot-separated labels
        assert!(!is_valid("http://[::1]/page"));
    }

    #[test]
    fn test_uppercase_input_accepted() {
        assert!(is_valid("HTTP://EXAMPLE.COM/PAGE"));
    }

    #[test]
    fn test_query_and_fragment_ignored_by_predicate() {
        assert!(is_valid("https://example.com/search?q=rust"));
        assert!(is_valid("https://example.com/page#section"));
    }
}

//! Destination URL parsing and canonicalization.
//!
//! The canonical form of a URL is whatever [`Url`] re-serializes it to: the
//! scheme and host are lowercased, default ports are dropped and an empty path
//! becomes `/`.

use url::Url;

/// Errors that can occur while canonicalizing a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// The same check runs when a link is written and again every time a stored
/// URL is read back for a redirect.
///
/// # Errors
///
/// - [`UrlError::InvalidFormat`] for anything `url` cannot parse, including relative URLs
/// - [`UrlError::UnsupportedProtocol`] for non-HTTP(S) schemes (`javascript:`, `data:`, `ftp:` ...)
/// - [`UrlError::MissingHost`] if the URL carries no host
pub fn canonicalize_url(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_exact_url() {
        let url = canonicalize_url("http://example.com/a").unwrap();
        assert_eq!(url.as_str(), "http://example.com/a");
    }

    #[test]
    fn test_adds_root_path() {
        let url = canonicalize_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_lowercases_scheme_and_host() {
        let url = canonicalize_url("HTTPS://EXAMPLE.COM/Path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/Path");
    }

    #[test]
    fn test_drops_default_port() {
        let url = canonicalize_url("https://example.com:443/path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_keeps_custom_port_query_and_fragment() {
        let url = canonicalize_url("http://localhost:8080/search?q=rust#top").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/search?q=rust#top");
    }

    #[test]
    fn test_percent_encodes_spaces() {
        let url = canonicalize_url("https://example.com/a b").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a%20b");
    }

    #[test]
    fn test_canonical_form_is_stable() {
        let once = canonicalize_url("HTTP://Example.com:80").unwrap();
        let twice = canonicalize_url(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            canonicalize_url("example.com/page"),
            Err(UrlError::InvalidFormat(_))
        ));
        assert!(matches!(
            canonicalize_url("/just/a/path"),
            Err(UrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(canonicalize_url("not a url").is_err());
        assert!(canonicalize_url("").is_err());
    }

    #[test]
    fn test_rejects_script_and_data_schemes() {
        assert!(matches!(
            canonicalize_url("javascript:alert(1)"),
            Err(UrlError::UnsupportedProtocol)
        ));
        assert!(matches!(
            canonicalize_url("data:text/plain,hi"),
            Err(UrlError::UnsupportedProtocol)
        ));
        assert!(matches!(
            canonicalize_url("ftp://example.com/file"),
            Err(UrlError::UnsupportedProtocol)
        ));
    }
}

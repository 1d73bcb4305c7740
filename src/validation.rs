use url::Url;

/// Base used to check absolute paths, which carry no scheme or host of their own
const PATH_BASE: &str = "http://localhost";

/// Check that `input` is a well-formed request URI
///
/// Accepts either an absolute URI with a scheme (`https://example.com/a?b=c`,
/// `mailto:someone@example.com`) or an absolute path (`/docs/index.html`).
/// Rejects empty input, control characters, surrounding whitespace, and
/// anything else that needs a base to be interpreted (`example.com`,
/// `not a url`).
pub fn is_valid_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    // `Url::parse` trims these silently, but the raw string is what gets stored
    if input.trim() != input {
        return false;
    }

    if input.starts_with('/') {
        return Url::parse(PATH_BASE)
            .and_then(|base| base.join(input))
            .is_ok();
    }

    Url::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_are_valid() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://localhost:8080/path?query=1"));
        assert!(is_valid_url("https://example.com/page#section"));
        assert!(is_valid_url("ftp://files.example.com/pub/file.txt"));
        assert!(is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_absolute_paths_are_valid() {
        assert!(is_valid_url("/"));
        assert!(is_valid_url("/docs/index.html"));
        assert!(is_valid_url("/search?q=rust"));
    }

    #[test]
    fn test_plain_words_are_invalid() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("hello"));
    }

    #[test]
    fn test_missing_scheme_is_invalid() {
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("www.example.com/path"));
        assert!(!is_valid_url("relative/path"));
        assert!(!is_valid_url("://example.com"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_control_characters_are_invalid() {
        assert!(!is_valid_url("https://example.com/\n"));
        assert!(!is_valid_url("https://exa\tmple.com"));
        assert!(!is_valid_url("/path\r\nLocation: evil"));
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid() {
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com "));
        assert!(!is_valid_url(" /docs"));
        assert!(!is_valid_url("/docs "));
        assert!(!is_valid_url(" "));
    }

    #[test]
    fn test_malformed_host_is_invalid() {
        assert!(!is_valid_url("http://[::1"));
        assert!(!is_valid_url("http://exa mple.com"));
    }
}

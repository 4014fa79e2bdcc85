//! Rate limit metadata parsed from response headers.
//!
//! Every response from the API carries the current quota in two headers,
//! `X-Ratelimit-Limit` and `X-Ratelimit-Remaining`. Both are read on every
//! call, including calls whose body fails to parse.

use http::HeaderMap;

/// Header carrying the hourly request ceiling.
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header carrying the number of requests left in the current window.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// The `(limit, remaining)` pair reported by a response.
///
/// Missing or non-numeric headers read as `0`.
///
/// # Examples
///
/// ```
/// use instagram_client::rate_limit::RateLimit;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-ratelimit-limit", "5000".parse().unwrap());
/// headers.insert("x-ratelimit-remaining", "4999".parse().unwrap());
///
/// let rate_limit = RateLimit::from_headers(&headers);
/// assert_eq!(rate_limit.limit, 5000);
/// assert_eq!(rate_limit.remaining, 4999);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum number of calls allowed in the current window.
    pub limit: u64,

    /// Number of calls left in the current window.
    pub remaining: u64,
}

impl RateLimit {
    /// Creates a new pair.
    pub fn new(limit: u64, remaining: u64) -> Self {
        Self { limit, remaining }
    }

    /// Extracts the rate limit pair from HTTP response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_header(headers, LIMIT_HEADER),
            remaining: parse_header(headers, REMAINING_HEADER),
        }
    }

    /// Returns `true` when the server reported a ceiling and no calls are left.
    ///
    /// A pair of zeros means the headers were absent, which is not treated as
    /// exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

/// Parses an integer header, falling back to `0`.
fn parse_header(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};

    #[test]
    fn test_parse_both_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(LIMIT_HEADER, HeaderValue::from_static("5000"));
        headers.insert(REMAINING_HEADER, HeaderValue::from_static("42"));

        let rate_limit = RateLimit::from_headers(&headers);
        assert_eq!(rate_limit, RateLimit::new(5000, 42));
        assert!(!rate_limit.is_exhausted());
    }

    #[test]
    fn test_missing_headers_default_to_zero() {
        let rate_limit = RateLimit::from_headers(&HeaderMap::new());
        assert_eq!(rate_limit, RateLimit::default());
        assert!(!rate_limit.is_exhausted());
    }

    #[test]
    fn test_non_numeric_headers_default_to_zero() {
        let mut headers = HeaderMap::new();
        headers.insert(LIMIT_HEADER, HeaderValue::from_static("lots"));
        headers.insert(REMAINING_HEADER, HeaderValue::from_static("-3"));

        let rate_limit = RateLimit::from_headers(&headers);
        assert_eq!(rate_limit.limit, 0);
        assert_eq!(rate_limit.remaining, 0);
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"X-Ratelimit-Limit").unwrap(),
            HeaderValue::from_static("10"),
        );
        headers.insert(
            HeaderName::from_bytes(b"X-Ratelimit-Remaining").unwrap(),
            HeaderValue::from_static("0"),
        );

        let rate_limit = RateLimit::from_headers(&headers);
        assert_eq!(rate_limit, RateLimit::new(10, 0));
        assert!(rate_limit.is_exhausted());
    }
}

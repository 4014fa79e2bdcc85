//! Error types for Instagram API calls.
//!
//! Failures fall into five groups: configuration (no token, bad base URL),
//! transport (connection failures and timeouts), parse (the body was not
//! JSON), remote API errors (an envelope whose `meta.code` is not 200) and
//! malformed envelopes (valid JSON whose `meta` is missing or not an object). Every
//! variant that was produced from a response keeps the rate limit pair and
//! the raw payload for debugging.

use crate::rate_limit::RateLimit;
use crate::response::Meta;

/// The main error type for Instagram API calls.
///
/// # Examples
///
/// ```no_run
/// use instagram_client::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("my-access-token")?;
///
/// match client.get_user("self").await {
///     Ok(reply) => println!("User: {}", reply.data),
///     Err(Error::Api { meta, .. }) => {
///         eprintln!("Instagram refused the call: {}", meta);
///     }
///     Err(Error::ParseFailed { raw_response, .. }) => {
///         eprintln!("Not JSON: {}", raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No access token was configured on the client.
    ///
    /// Raised before any request is built, so nothing is sent.
    #[error("Missing access_token")]
    MissingAccessToken,

    /// A network-level error occurred (connection refused, DNS failure, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded the configured timeout and was aborted.
    #[error("Request timed out")]
    Timeout,

    /// The response body was not valid JSON.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The body exactly as received
    /// * `serde_error` - The error message from serde
    /// * `rate_limit` - Rate limit pair read from the response headers
    #[error("Failed to parse response: {serde_error}")]
    ParseFailed {
        /// The raw response body that failed to parse
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// Rate limit pair of the response
        rate_limit: RateLimit,
    },

    /// The envelope had a `meta` object whose `code` was not the number 200.
    #[error("API error {meta}")]
    Api {
        /// The `meta` block carrying the remote error code, type and message
        meta: Meta,
        /// Rate limit pair of the response
        rate_limit: RateLimit,
    },

    /// The body was valid JSON but its `meta` was missing, `null` or not an object.
    #[error("Malformed response envelope: {body}")]
    MalformedEnvelope {
        /// The parsed body as received
        body: serde_json::Value,
        /// Rate limit pair of the response
        rate_limit: RateLimit,
    },

    /// Invalid configuration was provided.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Classifies a `reqwest` failure, splitting timeouts out of other
    /// network errors.
    pub(crate) fn transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(error)
        }
    }

    /// Returns `true` for connection failures and timeouts.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Timeout)
    }

    /// Returns the remote `meta` block for [`Error::Api`].
    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Error::Api { meta, .. } => Some(meta),
            _ => None,
        }
    }

    /// Returns the raw body for parse failures.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::ParseFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the rate limit pair if the error was produced from a response.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        match self {
            Error::ParseFailed { rate_limit, .. }
            | Error::Api { rate_limit, .. }
            | Error::MalformedEnvelope { rate_limit, .. } => Some(*rate_limit),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Instagram API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> Error {
        Error::Api {
            meta: Meta {
                code: Some(400),
                error_type: Some("APINotFoundError".to_string()),
                error_message: Some("this user does not exist".to_string()),
            },
            rate_limit: RateLimit::new(5000, 4990),
        }
    }

    #[test]
    fn test_api_error_exposes_meta() {
        let err = api_error();
        assert_eq!(err.meta().and_then(|m| m.code), Some(400));
        assert_eq!(err.rate_limit(), Some(RateLimit::new(5000, 4990)));
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "API error 400 APINotFoundError: this user does not exist"
        );
    }

    #[test]
    fn test_parse_failure_keeps_raw_body() {
        let err = Error::ParseFailed {
            raw_response: "<html>oops</html>".to_string(),
            serde_error: "expected value at line 1 column 1".to_string(),
            rate_limit: RateLimit::default(),
        };
        assert_eq!(err.raw_response(), Some("<html>oops</html>"));
        assert!(err.meta().is_none());
    }

    #[test]
    fn test_configuration_errors_carry_no_rate_limit() {
        assert!(Error::MissingAccessToken.rate_limit().is_none());
        assert!(Error::Timeout.is_transport());
        assert_eq!(Error::MissingAccessToken.to_string(), "Missing access_token");
    }
}

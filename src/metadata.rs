//! Request metadata: what a single API call sends.

use crate::params::{IntoParams, Params};
use http::Method;

/// Metadata for an individual API request.
///
/// Holds the HTTP method, the endpoint path segments relative to the API
/// prefix, and the call's own parameters. The client adds `access_token`
/// and the default `count` when the request is dispatched.
///
/// # Examples
///
/// ```
/// use instagram_client::metadata::RequestMetadata;
/// use http::Method;
///
/// let request = RequestMetadata::new(Method::GET, ["users", "self", ""])
///     .with_param("count", 5);
/// assert_eq!(request.path(), "users/self/");
/// assert_eq!(request.params.get("count"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST or DELETE).
    pub method: Method,

    /// Path segments below the API prefix, not yet percent-encoded.
    ///
    /// A trailing empty segment produces a trailing slash.
    pub segments: Vec<String>,

    /// Parameters of this call.
    pub params: Params,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path segments.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            params: Params::new(),
        }
    }

    /// Adds a parameter to the request, replacing any previous value.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.set(key, value);
        self
    }

    /// Adds every present field of an options struct.
    pub fn with_params(mut self, options: &impl IntoParams) -> Self {
        options.write_params(&mut self.params);
        self
    }

    /// Returns the endpoint path joined with `/`, for logging.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MediaPage;

    #[test]
    fn test_required_param_overrides_option() {
        let request = RequestMetadata::new(Method::GET, ["users", "search"])
            .with_params(&Params::from_iter([("q", "from-options")]))
            .with_param("q", "jack");
        assert_eq!(request.params.get("q"), Some("jack"));
    }

    #[test]
    fn test_with_params_merges_options() {
        let request = RequestMetadata::new(Method::GET, ["users", "self", "media", "recent"])
            .with_params(&MediaPage::new().max_id("99"));
        assert_eq!(request.path(), "users/self/media/recent");
        assert_eq!(request.params.len(), 1);
        assert_eq!(request.params.get("max_id"), Some("99"));
    }
}

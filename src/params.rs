//! Call parameters and the optional-field structs each operation accepts.
//!
//! Optional parameters are explicit `Option` fields, so a field is sent when
//! it was set and only then. `count = 0` or an empty cursor are real values
//! and go on the wire unchanged. Every options struct implements `Default`,
//! which stands for "all optional arguments omitted".

use std::collections::BTreeMap;

/// Ordered string parameters of a single call.
///
/// Sent as the query string for GET and DELETE and as a form body for POST.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.insert(key.into(), value.to_string());
    }

    /// Sets `key` only when `value` is present.
    pub fn set_opt<V: ToString>(&mut self, key: &str, value: Option<&V>) {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
    }

    /// Sets `key` unless it already has a value.
    pub fn set_default(&mut self, key: &str, value: impl ToString) {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    pub fn to_form(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Conversion of an options struct into call parameters.
pub trait IntoParams {
    /// Writes every present field into `params`.
    fn write_params(&self, params: &mut Params);

    /// Collects the present fields into a fresh [`Params`].
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.write_params(&mut params);
        params
    }
}

impl IntoParams for Params {
    fn write_params(&self, params: &mut Params) {
        for (key, value) in self.iter() {
            params.set(key, value);
        }
    }
}

/// Pagination over a user's or location's media.
///
/// # Examples
///
/// ```
/// use instagram_client::params::{IntoParams, MediaPage};
///
/// let page = MediaPage::new().count(0).max_id("1234");
/// let params = page.to_params();
/// assert_eq!(params.get("count"), Some("0"));
/// assert_eq!(params.get("max_id"), Some("1234"));
/// assert_eq!(params.get("min_id"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPage {
    /// Number of media to return.
    pub count: Option<u32>,
    /// Return media earlier than this id.
    pub max_id: Option<String>,
    /// Return media later than this id.
    pub min_id: Option<String>,
}

impl MediaPage {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of results to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the cursor to return media earlier than.
    pub fn max_id(mut self, max_id: impl Into<String>) -> Self {
        self.max_id = Some(max_id.into());
        self
    }

    /// Sets the cursor to return media later than.
    pub fn min_id(mut self, min_id: impl Into<String>) -> Self {
        self.min_id = Some(min_id.into());
        self
    }
}

impl IntoParams for MediaPage {
    fn write_params(&self, params: &mut Params) {
        params.set_opt("count", self.count.as_ref());
        params.set_opt("max_id", self.max_id.as_ref());
        params.set_opt("min_id", self.min_id.as_ref());
    }
}

/// Pagination over the media the token owner liked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedPage {
    /// Number of media to return.
    pub count: Option<u32>,
    /// Return media liked before this id.
    pub max_like_id: Option<String>,
}

impl LikedPage {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of results to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the cursor to return media liked before.
    pub fn max_like_id(mut self, max_like_id: impl Into<String>) -> Self {
        self.max_like_id = Some(max_like_id.into());
        self
    }
}

impl IntoParams for LikedPage {
    fn write_params(&self, params: &mut Params) {
        params.set_opt("count", self.count.as_ref());
        params.set_opt("max_like_id", self.max_like_id.as_ref());
    }
}

/// Pagination over a tag's media. Tag cursors are separate from media ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPage {
    /// Number of media to return.
    pub count: Option<u32>,
    /// Return media before this tag cursor.
    pub max_tag_id: Option<String>,
    /// Return media after this tag cursor.
    pub min_tag_id: Option<String>,
}

impl TagPage {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of results to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the tag cursor to return media before.
    pub fn max_tag_id(mut self, max_tag_id: impl Into<String>) -> Self {
        self.max_tag_id = Some(max_tag_id.into());
        self
    }

    /// Sets the tag cursor to return media after.
    pub fn min_tag_id(mut self, min_tag_id: impl Into<String>) -> Self {
        self.min_tag_id = Some(min_tag_id.into());
        self
    }
}

impl IntoParams for TagPage {
    fn write_params(&self, params: &mut Params) {
        params.set_opt("count", self.count.as_ref());
        params.set_opt("max_tag_id", self.max_tag_id.as_ref());
        params.set_opt("min_tag_id", self.min_tag_id.as_ref());
    }
}

/// Options for user and tag searches. The search term itself is a required
/// argument of the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of results to return.
    pub count: Option<u32>,
}

impl SearchOptions {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of results to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl IntoParams for SearchOptions {
    fn write_params(&self, params: &mut Params) {
        params.set_opt("count", self.count.as_ref());
    }
}

/// Options for searches around a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoOptions {
    /// Search radius in meters. The API accepts 0 to 750 for locations and
    /// up to 5000 for media.
    pub distance: Option<u32>,
    /// Number of results to return.
    pub count: Option<u32>,
}

impl GeoOptions {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search radius in meters.
    pub fn distance(mut self, meters: u32) -> Self {
        self.distance = Some(meters);
        self
    }

    /// Sets the number of results to return.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl IntoParams for GeoOptions {
    fn write_params(&self, params: &mut Params) {
        params.set_opt("distance", self.distance.as_ref());
        params.set_opt("count", self.count.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_emit_nothing() {
        assert!(MediaPage::default().to_params().is_empty());
        assert!(LikedPage::default().to_params().is_empty());
        assert!(TagPage::default().to_params().is_empty());
        assert!(SearchOptions::default().to_params().is_empty());
        assert!(GeoOptions::default().to_params().is_empty());
    }

    #[test]
    fn test_falsy_values_are_kept() {
        let params = MediaPage::new().count(0).min_id("").to_params();
        assert_eq!(params.get("count"), Some("0"));
        assert_eq!(params.get("min_id"), Some(""));
        assert!(!params.contains("max_id"));

        let params = GeoOptions::new().distance(0).to_params();
        assert_eq!(params.get("distance"), Some("0"));
    }

    #[test]
    fn test_set_default_does_not_override() {
        let mut params = SearchOptions::new().count(3).to_params();
        params.set_default("count", 10);
        assert_eq!(params.get("count"), Some("3"));

        let mut params = Params::new();
        params.set_default("count", 10);
        assert_eq!(params.get("count"), Some("10"));
    }

    #[test]
    fn test_form_encoding() {
        let params: Params = [("text", "nice shot & all"), ("access_token", "a.b+c")]
            .into_iter()
            .collect();
        assert_eq!(
            params.to_form(),
            "access_token=a.b%2Bc&text=nice+shot+%26+all"
        );
    }

    #[test]
    fn test_tag_page_fields() {
        let params = TagPage::new()
            .max_tag_id("1200")
            .min_tag_id("1100")
            .to_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("max_tag_id"), Some("1200"));
        assert_eq!(params.get("min_tag_id"), Some("1100"));
    }
}

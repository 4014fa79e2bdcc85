//! Response envelope types and the bridge from a finished call to its result.
//!
//! Every call ends in a [`Completion`]: either the parsed JSON body or an
//! error, together with the rate limit pair of the response. A completion is
//! delivered one of two ways. Callers that passed a callback receive it
//! as-is through [`Completion::deliver`]. Callers awaiting a future get it
//! through [`Completion::into_reply`], which checks the envelope and turns
//! it into a [`Reply`] or an [`Error`].

use crate::{rate_limit::RateLimit, Error, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The `meta` block of the API's response envelope.
///
/// `code` is 200 on success. On failure the API fills in `error_type` and
/// `error_message`. Any JSON object counts as a `meta` block; fields that are
/// missing or of the wrong type read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Status code reported inside the envelope, if it was a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Remote error class, such as `OAuthAccessTokenException`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Human readable error description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Meta {
    /// Reads a `meta` block from a JSON value.
    ///
    /// Returns `None` unless `value` is an object. A `code` that is not an
    /// integer in `u16` range, such as `"400"`, reads as `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Meta {
            code: object
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok()),
            error_type: text("error_type"),
            error_message: text("error_message"),
        })
    }

    /// Returns `true` when the envelope signals success.
    pub fn is_success(&self) -> bool {
        self.code == Some(200)
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}", code)?,
            None => write!(f, "unknown")?,
        }
        if let Some(error_type) = &self.error_type {
            write!(f, " {}", error_type)?;
        }
        if let Some(error_message) = &self.error_message {
            write!(f, ": {}", error_message)?;
        }
        Ok(())
    }
}

/// The outcome of a single dispatched call, before delivery.
#[derive(Debug)]
pub struct Completion {
    /// The parsed body, or the configuration, transport or parse error.
    pub result: Result<Value>,

    /// Rate limit pair of the response. Zero when no response arrived.
    pub rate_limit: RateLimit,
}

impl Completion {
    pub(crate) fn new(result: Result<Value>, rate_limit: RateLimit) -> Self {
        Self { result, rate_limit }
    }

    pub(crate) fn failed(error: Error) -> Self {
        Self::new(Err(error), RateLimit::default())
    }

    /// Hands the raw outcome to a callback.
    ///
    /// The envelope is passed through untouched: a body whose `meta.code` is
    /// 400 still arrives as `Ok`.
    pub fn deliver<F>(self, callback: F)
    where
        F: FnOnce(Result<Value>, RateLimit),
    {
        callback(self.result, self.rate_limit)
    }

    /// Resolves the outcome into a [`Reply`], checking the envelope.
    ///
    /// - `meta.code == 200` resolves to a reply carrying `data` and the
    ///   rate limit pair.
    /// - Any other `meta.code`, including a missing or non-numeric one,
    ///   rejects with [`Error::Api`].
    /// - A body whose `meta` is missing, `null` or not an object rejects with
    ///   [`Error::MalformedEnvelope`].
    /// - Errors from the dispatcher are returned unchanged.
    pub fn into_reply(self) -> Result<Reply> {
        let rate_limit = self.rate_limit;
        let mut body = self.result?;

        let meta = match body.get("meta").and_then(Meta::from_value) {
            Some(meta) => meta,
            None => return Err(Error::MalformedEnvelope { body, rate_limit }),
        };

        if !meta.is_success() {
            return Err(Error::Api { meta, rate_limit });
        }

        let (data, pagination) = match body.as_object_mut() {
            Some(object) => (
                object.remove("data").unwrap_or(Value::Null),
                object.remove("pagination"),
            ),
            None => (Value::Null, None),
        };

        Ok(Reply {
            code: 200,
            data,
            count: rate_limit.limit,
            remaining: rate_limit.remaining,
            pagination,
        })
    }
}

/// A successful API reply.
///
/// # Examples
///
/// ```no_run
/// use instagram_client::Client;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: String,
///     username: String,
/// }
///
/// # async fn example() -> Result<(), instagram_client::Error> {
/// let client = Client::new("my-access-token")?;
///
/// let reply = client.get_user("self").await?;
/// let user: User = reply.data_as()?;
/// println!("{} ({})", user.username, user.id);
/// println!("{} of {} calls left", reply.remaining, reply.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The envelope's `meta.code`, always 200.
    pub code: u16,

    /// The envelope's `data` payload.
    pub data: Value,

    /// Rate limit ceiling reported by the response.
    pub count: u64,

    /// Calls remaining in the current rate limit window.
    pub remaining: u64,

    /// The envelope's `pagination` block, present on list endpoints.
    pub pagination: Option<Value>,
}

impl Reply {
    /// Deserializes `data` into a caller-chosen type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseFailed`] carrying the serialized payload if the
    /// data does not match `T`.
    pub fn data_as<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        T::deserialize(&self.data).map_err(|e| Error::ParseFailed {
            raw_response: self.data.to_string(),
            serde_error: e.to_string(),
            rate_limit: self.rate_limit(),
        })
    }

    /// Returns the cursor for the next page, if the API reported one.
    pub fn next_max_id(&self) -> Option<&str> {
        self.pagination.as_ref()?.get("next_max_id")?.as_str()
    }

    /// Returns the rate limit pair as a [`RateLimit`].
    pub fn rate_limit(&self) -> RateLimit {
        RateLimit::new(self.count, self.remaining)
    }
}

impl AsRef<Value> for Reply {
    fn as_ref(&self) -> &Value {
        &self.data
    }
}

impl std::ops::Deref for Reply {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

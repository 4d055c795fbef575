//! Outgoing request description.
//!
//! An [`HttpRequest`] is what a [`Transport`](crate::clients::Transport)
//! receives once a resource wrapper has rendered its path template and
//! turned its options into a query map and an optional JSON body. Nothing
//! here touches the network.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::PLACEHOLDER;

/// Verb of an M2X call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Encoding of a request body. M2X v2 only accepts JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`
    Json,
}

impl DataType {
    /// Value sent in the `Content-Type` header.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A resolved call against the M2X API.
///
/// `path` is relative to the versioned base path (`/v2`), so a stream
/// update targets `/devices/d1/streams/temperature`, not the full URL.
///
/// ```rust
/// use m2x::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let location = HttpRequest::builder(HttpMethod::Put, "/devices/d1/location")
///     .body(json!({"latitude": 33.75, "longitude": -84.39}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert_eq!(location.body_type, Some(DataType::Json));
///
/// // Regenerating a key takes no payload.
/// let regenerate = HttpRequest::builder(HttpMethod::Post, "/keys/abc/regenerate")
///     .build()
///     .unwrap();
/// assert!(regenerate.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    /// Path below the API version prefix.
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub body_type: Option<DataType>,
    /// Rendered query string pairs.
    pub query: Option<HashMap<String, String>>,
    /// Headers sent on top of the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempts allowed for retryable statuses; the client setting wins if higher.
    pub tries: u32,
}

impl HttpRequest {
    /// Starts a request for `method` on `path`.
    ///
    /// ```rust
    /// use m2x::clients::{HttpMethod, HttpRequest};
    ///
    /// let catalog = HttpRequest::builder(HttpMethod::Get, "/devices/catalog")
    ///     .query_param("q", "thermostat")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(catalog.query.unwrap()["q"], "thermostat");
    /// ```
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                query: None,
                extra_headers: None,
                tries: 1,
            },
        }
    }

    /// Checks that the request can be put on the wire.
    ///
    /// Any verb may go out without a body. A body needs a
    /// [`DataType`], and the path must not keep a `%s` placeholder.
    ///
    /// # Errors
    ///
    /// [`InvalidHttpRequestError::UnresolvedPath`] or
    /// [`InvalidHttpRequestError::MissingBodyType`].
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.contains(PLACEHOLDER) {
            return Err(InvalidHttpRequestError::UnresolvedPath {
                path: self.path.clone(),
            });
        }
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }
        Ok(())
    }
}

/// Fluent construction of an [`HttpRequest`], checked by
/// [`HttpRequest::verify`] in [`build`](Self::build).
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// JSON payload. Pair it with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Replaces the whole query map.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.request.query = Some(query);
        self
    }

    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces the whole extra header map.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.request.extra_headers = Some(headers);
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attempts allowed on 429, 500 and 503 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Whatever [`HttpRequest::verify`] rejects.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

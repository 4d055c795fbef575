//! The transport boundary used by every resource wrapper.
//!
//! A [`Transport`] executes a fully resolved [`HttpRequest`] and exposes the
//! four verb helpers (`get`, `post`, `put`, `delete`) that resource wrappers
//! call. Each verb accepts an optional [`RequestOptions`] bag; passing `None`
//! is the same as passing empty options.
//!
//! [`HttpClient`](crate::clients::HttpClient) is the production
//! implementation. Tests and alternative runtimes can provide their own.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::rest::Params;

/// Options accepted by the transport verb helpers.
///
/// - `qs`: query parameters (scalars are rendered to strings)
/// - `headers`: extra request headers
/// - `params`: the JSON request body
///
/// # Example
///
/// ```rust
/// use m2x::clients::RequestOptions;
/// use m2x::rest::Params;
/// use serde_json::json;
///
/// let mut qs = Params::new();
/// qs.insert("collection".to_string(), json!("c1"));
///
/// let options = RequestOptions::new().qs(qs).header("X-Trace", "abc");
/// assert!(options.params.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// Query string parameters.
    pub qs: Option<Params>,
    /// Extra headers.
    pub headers: HashMap<String, String>,
    /// JSON body parameters.
    pub params: Option<Params>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn qs(mut self, qs: Params) -> Self {
        self.qs = Some(qs);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body parameters.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Converts the options into a validated [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the resulting request fails
    /// [`HttpRequest::verify`].
    pub fn into_request(
        self,
        method: HttpMethod,
        path: &str,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(qs) = self.qs {
            builder = builder.query(to_query(&qs));
        }
        if !self.headers.is_empty() {
            builder = builder.extra_headers(self.headers);
        }
        if let Some(params) = self.params {
            builder = builder.body(Value::Object(params)).body_type(DataType::Json);
        }

        builder.build()
    }
}

/// Renders parameters as query string values.
///
/// Strings are kept verbatim, numbers and booleans use their JSON text and
/// objects are sent as JSON. Null values are skipped. Arrays are
/// comma-joined with the same rules per element, and an empty array is sent
/// as an empty value (`tags=`) instead of vanishing.
#[must_use]
pub fn to_query(params: &Params) -> HashMap<String, String> {
    params
        .iter()
        .filter_map(|(key, val)| {
            let rendered = match val {
                Value::Null => return None,
                Value::Array(items) => items
                    .iter()
                    .filter_map(query_value)
                    .collect::<Vec<_>>()
                    .join(","),
                other => query_value(other)?,
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        }
    }
}

/// An HTTP execution boundary.
///
/// Implementors only provide [`send`](Transport::send); the verb helpers are
/// derived from it. Implementations must tolerate concurrent calls: wrappers
/// share one transport and never serialize access to it.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Executes a single request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Builds a request from `options` and sends it.
    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        let request = options.unwrap_or_default().into_request(method, path)?;
        self.send(request).await
    }

    /// Sends a GET request.
    async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.call(HttpMethod::Get, path, options).await
    }

    /// Sends a POST request.
    async fn post(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.call(HttpMethod::Post, path, options).await
    }

    /// Sends a PUT request.
    async fn put(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.call(HttpMethod::Put, path, options).await
    }

    /// Sends a DELETE request.
    async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.call(HttpMethod::Delete, path, options).await
    }
}

//! HTTP client types for M2X API communication.
//!
//! This module provides the HTTP layer used by the resource wrappers: request
//! and response types, the [`Transport`] boundary, and the production
//! [`HttpClient`] with its retry logic.
//!
//! # Overview
//!
//! - [`Transport`]: The execution boundary every resource talks to
//! - [`RequestOptions`]: Query string, headers and JSON body for one call
//! - [`HttpClient`]: The reqwest-backed transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::{ApiKey, M2xConfig};
//! use m2x::clients::{HttpClient, Transport};
//!
//! let config = M2xConfig::builder()
//!     .api_key(ApiKey::new("your-key").unwrap())
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let response = client.get("/time", None).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)** and **503**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure it on
//! [`M2xConfig`](crate::M2xConfig) or per request with
//! [`HttpRequestBuilder::tries`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, API_KEY_HEADER, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{to_query, RequestOptions, Transport};

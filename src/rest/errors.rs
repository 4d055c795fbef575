//! Resource-specific error types for REST API operations.
//!
//! [`ResourceError`] covers failures that happen while turning a wrapper call
//! into a request (bad templates, missing identifiers, unserializable
//! parameters) and wraps transport failures as [`ResourceError::Http`].
//!
//! Template and identifier errors are raised before the transport is
//! touched, so no request is ever sent for them.
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::rest::{CrudResource, ResourceError};
//!
//! match client.collections().view("c1").await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(ResourceError::Http(e)) if e.status() == Some(404) => println!("no such collection"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use m2x::rest::ResourceError;
///
/// let error = ResourceError::MissingIdentifier {
///     resource: "Collection",
///     name: "id",
/// };
/// assert!(error.to_string().contains("Collection"));
/// assert!(error.to_string().contains("id"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The number of identifiers does not match the template placeholders.
    #[error("Path template '{template}' expects {expected} identifier(s), got {actual}")]
    TemplateArity {
        /// The template being rendered.
        template: String,
        /// Number of placeholders in the template.
        expected: usize,
        /// Number of identifiers supplied.
        actual: usize,
    },

    /// A required identifier was empty.
    #[error("{resource} requires a non-empty '{name}' identifier")]
    MissingIdentifier {
        /// The type name of the resource (e.g., "Collection").
        resource: &'static str,
        /// The name of the identifier (e.g., "id", "device_id").
        name: &'static str,
    },

    /// The resource declares no path for the requested operation.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "view", "add_association").
        operation: &'static str,
    },

    /// Typed parameters could not be turned into a JSON object.
    #[error("Invalid parameters: {reason}")]
    InvalidParams {
        /// Why conversion failed.
        reason: String,
    },

    /// An HTTP-level error occurred.
    ///
    /// Transport failures are passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code if this error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::Http(_))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

//! Path building infrastructure for REST resources.
//!
//! Every resource wrapper declares a table of [`ResourcePath`]s, one per
//! operation. A path carries the HTTP method, the names of the identifiers it
//! needs, and a template with one positional `%s` placeholder per identifier.
//!
//! Rendering is strict: the number of identifiers must match the number of
//! placeholders and no identifier may be empty. Violations are reported as
//! [`ResourceError`]s before anything reaches the transport, so a malformed
//! path is never sent.
//!
//! Identifiers are inserted verbatim. Callers whose identifiers may contain
//! reserved path characters can use [`build_encoded_path`] instead.
//!
//! # Example
//!
//! ```rust
//! use m2x::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use m2x::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/collections"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::View, &["id"], "/collections/%s"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::View).unwrap();
//! let url = build_path(path.template, &[&"c1"]).unwrap();
//! assert_eq!(url, "/collections/c1");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::rest::ResourceError;

/// The positional placeholder used in path templates.
pub const PLACEHOLDER: &str = "%s";

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET /resources).
    List,
    /// Create a resource (POST /resources).
    Create,
    /// Update a resource (PUT /resources/{id}).
    Update,
    /// View a single resource (GET /resources/{id}).
    View,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Read all metadata (GET /resources/{id}/metadata).
    Metadata,
    /// Read one metadata field (GET /resources/{id}/metadata/{field}).
    MetadataField,
    /// Replace all metadata (PUT /resources/{id}/metadata).
    UpdateMetadata,
    /// Write one metadata field (PUT /resources/{id}/metadata/{field}).
    UpdateMetadataField,
    /// Attach an associated resource (PUT /resources/{id}/{assoc}/{assoc_id}).
    AddAssociation,
    /// Detach an associated resource (DELETE /resources/{id}/{assoc}/{assoc_id}).
    RemoveAssociation,
    /// List API keys scoped to a resource (GET /keys?{resource}={id}).
    ListKeys,
    /// Regenerate an API key (POST /keys/{key}/regenerate).
    Regenerate,
    /// Search the public device catalog (GET /devices/catalog).
    Catalog,
    /// List device tags (GET /devices/tags).
    Tags,
    /// Read a device location (GET /devices/{id}/location).
    Location,
    /// Update a device location (PUT /devices/{id}/location).
    UpdateLocation,
    /// List device streams (GET /devices/{id}/streams).
    Streams,
    /// View a device stream (GET /devices/{id}/streams/{name}).
    Stream,
    /// Create or update a device stream (PUT /devices/{id}/streams/{name}).
    UpdateStream,
    /// Delete a device stream (DELETE /devices/{id}/streams/{name}).
    DeleteStream,
    /// Post values to several streams (POST /devices/{id}/updates).
    PostUpdates,
    /// Server time in all formats (GET /time).
    Time,
    /// Server time in seconds (GET /time/seconds).
    TimeSeconds,
    /// Server time in milliseconds (GET /time/millis).
    TimeMillis,
    /// Server time as ISO 8601 (GET /time/iso8601).
    TimeIso8601,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    ///
    /// Reads map to GET, creation to POST, updates and association adds to
    /// PUT, removals to DELETE.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::List
            | Self::View
            | Self::Metadata
            | Self::MetadataField
            | Self::ListKeys
            | Self::Catalog
            | Self::Tags
            | Self::Location
            | Self::Streams
            | Self::Stream
            | Self::Time
            | Self::TimeSeconds
            | Self::TimeMillis
            | Self::TimeIso8601 => HttpMethod::Get,
            Self::Create | Self::Regenerate | Self::PostUpdates => HttpMethod::Post,
            Self::Update
            | Self::UpdateMetadata
            | Self::UpdateMetadataField
            | Self::AddAssociation
            | Self::UpdateLocation
            | Self::UpdateStream => HttpMethod::Put,
            Self::Delete | Self::RemoveAssociation | Self::DeleteStream => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::View => "view",
            Self::Delete => "delete",
            Self::Metadata => "metadata",
            Self::MetadataField => "metadata_field",
            Self::UpdateMetadata => "update_metadata",
            Self::UpdateMetadataField => "update_metadata_field",
            Self::AddAssociation => "add_association",
            Self::RemoveAssociation => "remove_association",
            Self::ListKeys => "list_keys",
            Self::Regenerate => "regenerate",
            Self::Catalog => "catalog",
            Self::Tags => "tags",
            Self::Location => "location",
            Self::UpdateLocation => "update_location",
            Self::Streams => "streams",
            Self::Stream => "stream",
            Self::UpdateStream => "update_stream",
            Self::DeleteStream => "delete_stream",
            Self::PostUpdates => "post_updates",
            Self::Time => "time",
            Self::TimeSeconds => "time_seconds",
            Self::TimeMillis => "time_millis",
            Self::TimeIso8601 => "time_iso8601",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// # Path Templates
///
/// Templates use one `%s` placeholder per entry of `ids`, in order:
/// - `/devices/%s` with `ids = ["id"]`
/// - `/collections/%s/devices/%s` with `ids = ["id", "device_id"]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Identifier names in placeholder order (e.g., `["id", "field"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `%s` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of identifiers this path requires.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of placeholders in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }

    /// Returns `true` when the declared identifiers match the template.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.placeholder_count() == self.id_count()
    }

    /// Renders this path for `resource` with the given identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::TemplateArity`] if the identifier count does
    /// not match, or [`ResourceError::MissingIdentifier`] if an identifier
    /// renders to an empty string.
    pub fn render(&self, resource: &'static str, ids: &[&str]) -> Result<String, ResourceError> {
        check_arity(self.template, self.placeholder_count(), ids.len())?;

        for (name, value) in self.ids.iter().zip(ids) {
            require_id(resource, *name, value)?;
        }

        Ok(interpolate(self.template, ids))
    }
}

/// Selects the path declared for an operation.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.operation == operation)
}

/// Builds a path from a template by substituting identifiers in order.
///
/// Substitution happens in a single pass, so an identifier that itself
/// contains `%s` is inserted as-is.
///
/// # Errors
///
/// Returns [`ResourceError::TemplateArity`] if the number of identifiers
/// differs from the number of placeholders.
///
/// # Example
///
/// ```rust
/// use m2x::rest::build_path;
///
/// let url = build_path("/collections/%s/devices/%s", &[&"c1", &42]).unwrap();
/// assert_eq!(url, "/collections/c1/devices/42");
///
/// assert!(build_path("/collections/%s", &[]).is_err());
/// ```
pub fn build_path(template: &str, ids: &[&dyn Display]) -> Result<String, ResourceError> {
    check_arity(template, template.matches(PLACEHOLDER).count(), ids.len())?;
    let values: Vec<String> = ids.iter().map(ToString::to_string).collect();
    Ok(interpolate(template, &values))
}

/// Like [`build_path`], but percent-encodes every identifier first.
///
/// # Errors
///
/// Returns [`ResourceError::TemplateArity`] on an identifier count mismatch.
///
/// # Example
///
/// ```rust
/// use m2x::rest::build_encoded_path;
///
/// let url = build_encoded_path("/devices/%s/streams/%s", &[&"d1", &"temp/inside"]).unwrap();
/// assert_eq!(url, "/devices/d1/streams/temp%2Finside");
/// ```
pub fn build_encoded_path(template: &str, ids: &[&dyn Display]) -> Result<String, ResourceError> {
    check_arity(template, template.matches(PLACEHOLDER).count(), ids.len())?;
    let values: Vec<String> = ids
        .iter()
        .map(|id| urlencoding::encode(&id.to_string()).into_owned())
        .collect();
    Ok(interpolate(template, &values))
}

/// Fails when a required identifier is empty.
///
/// # Errors
///
/// Returns [`ResourceError::MissingIdentifier`] if `value` is empty or blank.
pub fn require_id(
    resource: &'static str,
    name: &'static str,
    value: &str,
) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::MissingIdentifier { resource, name });
    }
    Ok(())
}

fn check_arity(template: &str, expected: usize, actual: usize) -> Result<(), ResourceError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ResourceError::TemplateArity {
            template: template.to_string(),
            expected,
            actual,
        })
    }
}

fn interpolate<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut segments = template.split(PLACEHOLDER);

    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for (segment, value) in segments.zip(values) {
        result.push_str(value.as_ref());
        result.push_str(segment);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

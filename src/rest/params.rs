//! Request parameter maps and the merge rules used by delegation.
//!
//! Parameters are plain JSON objects ([`Params`]). When one resource forwards
//! a call to another, it injects the owning resource's identifier with
//! [`merge_params`]: the caller's map is copied, never mutated, and injected
//! keys take precedence over caller keys with the same name.

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// A JSON object used for query strings and request bodies.
pub type Params = serde_json::Map<String, Value>;

/// Returns a new map holding `base` overlaid with `inject`.
///
/// A missing `base` is treated as an empty map. `base` itself is left
/// untouched, so callers may reuse it for other requests.
///
/// # Example
///
/// ```rust
/// use m2x::rest::{merge_params, Params};
/// use serde_json::json;
///
/// let mut base = Params::new();
/// base.insert("name".into(), json!("k"));
/// let mut inject = Params::new();
/// inject.insert("collection".into(), json!("c1"));
///
/// let merged = merge_params(Some(&base), &inject);
/// assert_eq!(merged.get("collection"), Some(&json!("c1")));
/// assert_eq!(merged.get("name"), Some(&json!("k")));
/// assert_eq!(base.len(), 1);
/// ```
#[must_use]
pub fn merge_params(base: Option<&Params>, inject: &Params) -> Params {
    let mut merged = base.cloned().unwrap_or_default();

    for (key, value) in inject {
        if let Some(previous) = merged.insert(key.clone(), value.clone()) {
            if &previous != value {
                tracing::debug!(
                    key = %key,
                    caller = %previous,
                    injected = %value,
                    "Injected parameter overrides caller value"
                );
            }
        }
    }

    merged
}

/// Serializes a typed value into a [`Params`] map.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if the value cannot be serialized
/// or does not serialize to a JSON object.
///
/// # Example
///
/// ```rust
/// use m2x::rest::to_params;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewKey { name: String, permissions: Vec<String> }
///
/// let params = to_params(&NewKey {
///     name: "reader".into(),
///     permissions: vec!["GET".into()],
/// }).unwrap();
/// assert_eq!(params["name"], "reader");
/// ```
pub fn to_params<T: Serialize + ?Sized>(value: &T) -> Result<Params, ResourceError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ResourceError::InvalidParams {
            reason: format!("expected a JSON object, got {other}"),
        }),
        Err(e) => Err(ResourceError::InvalidParams {
            reason: e.to_string(),
        }),
    }
}

/// The owning-resource field a delegated call must carry.
///
/// For example, creating a key through a collection injects
/// `{"collection": "<collection id>"}` into the key parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegationContext {
    field: &'static str,
    owner_id: String,
}

impl DelegationContext {
    /// Creates a context injecting `field = owner_id`.
    #[must_use]
    pub fn new(field: &'static str, owner_id: impl Into<String>) -> Self {
        Self {
            field,
            owner_id: owner_id.into(),
        }
    }

    /// Returns the injected field name.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the owning resource identifier.
    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Returns the context as a one-entry parameter map.
    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(self.field.to_string(), Value::String(self.owner_id.clone()));
        params
    }

    /// Merges this context into caller parameters.
    #[must_use]
    pub fn apply(&self, base: Option<&Params>) -> Params {
        merge_params(base, &self.to_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::params;
    use serde_json::json;

    #[test]
    fn test_merge_with_missing_base_returns_injection() {
        let inject = params(json!({"collection": "c1"}));
        assert_eq!(merge_params(None, &inject), inject);
    }

    #[test]
    fn test_merge_keeps_caller_keys() {
        let base = params(json!({"name": "k", "permissions": ["GET"]}));
        let merged = merge_params(Some(&base), &params(json!({"collection": "c1"})));

        assert_eq!(
            Value::Object(merged),
            json!({"name": "k", "permissions": ["GET"], "collection": "c1"})
        );
    }

    #[test]
    fn test_merge_injected_key_wins() {
        let base = params(json!({"name": "k", "collection": "other"}));
        let merged = merge_params(Some(&base), &params(json!({"collection": "c1"})));

        assert_eq!(merged["collection"], json!("c1"));
        assert_eq!(merged["name"], json!("k"));
    }

    #[test]
    fn test_merge_does_not_mutate_base() {
        let base = params(json!({"collection": "other"}));
        let snapshot = base.clone();

        let _ = merge_params(Some(&base), &params(json!({"collection": "c1"})));

        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_merge_with_empty_injection_copies_base() {
        let base = params(json!({"name": "k"}));
        assert_eq!(merge_params(Some(&base), &Params::new()), base);
    }

    #[test]
    fn test_to_params_accepts_structs() {
        #[derive(Serialize)]
        struct Location {
            latitude: f64,
            longitude: f64,
        }

        let result = to_params(&Location {
            latitude: 1.5,
            longitude: -2.0,
        })
        .unwrap();
        assert_eq!(result["latitude"], json!(1.5));
        assert_eq!(result["longitude"], json!(-2.0));
    }

    #[test]
    fn test_to_params_rejects_non_objects() {
        assert!(matches!(
            to_params(&vec![1, 2]),
            Err(ResourceError::InvalidParams { .. })
        ));
        assert!(matches!(
            to_params("text"),
            Err(ResourceError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_delegation_context_applies_field() {
        let context = DelegationContext::new("device", "d1");
        assert_eq!(context.field(), "device");
        assert_eq!(context.owner_id(), "d1");

        let merged = context.apply(Some(&params(json!({"device": "x", "name": "k"}))));
        assert_eq!(Value::Object(merged), json!({"device": "d1", "name": "k"}));
    }
}

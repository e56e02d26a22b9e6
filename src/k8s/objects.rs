/// Re-export of the k8s-openapi types this crate builds payloads from.
/// This module provides a centralized place for all K8s object types.
pub use k8s_openapi::api::core::v1::{Namespace, Secret};
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
pub use k8s_openapi::ByteString;

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::ConfigError;

/// Serializes a typed Kubernetes object into an engine payload value with
/// `apiVersion` and `kind` filled in. k8s-openapi types carry their type
/// metadata on the `Resource` impl, not in their serialized form.
pub fn object_payload<K>(object: &K) -> Result<Value, ConfigError>
where
    K: k8s_openapi::Resource + Serialize,
{
    let mut value = serde_json::to_value(object)?;
    if let Some(map) = value.as_object_mut() {
        map.insert("apiVersion".to_string(), json!(K::API_VERSION));
        map.insert("kind".to_string(), json!(K::KIND));
    }
    Ok(value)
}

/// Typed-provider collection paths carry a `{namespace}` placeholder that
/// the engine resolves from a top-level `namespace` key in the payload.
pub fn set_collection_namespace(payload: &mut Value, namespace: &str) {
    if let Some(map) = payload.as_object_mut() {
        map.insert("namespace".to_string(), Value::String(namespace.to_string()));
    }
}

/* ---------------- Tests ---------------- */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConfigError;

/// A single declarative resource entry in the rendered configuration.
///
/// `type` is either a built-in provider type (`compute.v1.image`) or a
/// composite `{project}/{type-provider}:{collection-path}` string. The
/// deployment engine interprets it; this crate only assembles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub properties: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResourceMetadata>,
}

impl ResourceDescriptor {
    /// Create a descriptor with no engine metadata attached.
    pub fn new(name: impl Into<String>, type_: impl Into<String>, properties: Value) -> Self {
        Self {
            name: name.into(),
            type_: type_.into(),
            properties,
            metadata: None,
        }
    }

    /// Order this resource after the named prerequisites. Dependencies are
    /// resolved by name; they may reference resources declared anywhere in
    /// the list or created by a sibling deployment step.
    pub fn depends_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = Some(ResourceMetadata {
            depends_on: names.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// Deployment-engine metadata attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetadata {
    pub depends_on: Vec<String>,
}

/// The `{resources: [...]}` wrapper handed to the deployment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub resources: Vec<ResourceDescriptor>,
}

impl ResourceConfig {
    /// Look up a resource by its unique name.
    pub fn resource(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Render the configuration as the YAML document the engine ingests.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the configuration as a JSON value.
    pub fn to_json(&self) -> Result<Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_engine_key_spelling() {
        let descriptor = ResourceDescriptor::new(
            "jenkins-home",
            "compute.v1.disk",
            json!({"zone": "us-central1-a"}),
        )
        .depends_on(["jenkins-home-image"]);

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["type"], "compute.v1.disk");
        assert_eq!(value["metadata"]["dependsOn"], json!(["jenkins-home-image"]));
    }

    #[test]
    fn test_metadata_key_absent_without_dependencies() {
        let descriptor =
            ResourceDescriptor::new("k8s-ingress-fw-rule", "compute.v1.firewall", json!({}));

        let value = serde_json::to_value(&descriptor).unwrap();
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = ResourceConfig {
            resources: vec![ResourceDescriptor::new(
                "jenkins-home-image",
                "compute.v1.image",
                json!({"name": "jenkins-home-image"}),
            )],
        };

        let yaml = config.to_yaml().unwrap();
        let parsed: ResourceConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_json_wraps_single_resources_key() {
        let config = ResourceConfig {
            resources: vec![ResourceDescriptor::new(
                "jenkins-namespace",
                "proj1/demo-gke-cluster-type:/api/v1/namespaces",
                json!({"kind": "Namespace"}),
            )],
        };

        let value = config.to_json().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["resources"]);
        assert_eq!(value["resources"][0]["name"], "jenkins-namespace");
    }

    #[test]
    fn test_resource_lookup_by_name() {
        let config = ResourceConfig {
            resources: vec![
                ResourceDescriptor::new("a", "compute.v1.image", json!({})),
                ResourceDescriptor::new("b", "compute.v1.disk", json!({})),
            ],
        };

        assert_eq!(config.resource("b").unwrap().type_, "compute.v1.disk");
        assert!(config.resource("missing").is_none());
    }
}

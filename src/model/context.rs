use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConfigError;

/// Input properties for the Jenkins environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JenkinsProperties {
    pub password: String,
    pub zone: String,
}

/// Deployment-engine environment for the current expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentEnv {
    pub deployment: String,
    pub project: String,
    pub name: String,
}

/// Everything the generator reads: input properties, the engine environment
/// and the raw text of the imported manifest files.
///
/// Constructing the struct directly makes field presence a compile-time
/// matter; [`DeploymentContext::from_value`] is the checked boundary for
/// callers holding the engine's untyped shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentContext {
    pub properties: JenkinsProperties,
    pub env: DeploymentEnv,
    #[serde(default)]
    pub imports: BTreeMap<String, String>,
}

impl DeploymentContext {
    /// Build a context from the untyped value shape the engine passes
    /// around. Every required field is checked here; the error names the
    /// dotted path of the first field found missing.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let properties = JenkinsProperties {
            password: require_str(value, "properties", "password")?,
            zone: require_str(value, "properties", "zone")?,
        };
        let env = DeploymentEnv {
            deployment: require_str(value, "env", "deployment")?,
            project: require_str(value, "env", "project")?,
            name: require_str(value, "env", "name")?,
        };
        let imports = value
            .get("imports")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            properties,
            env,
            imports,
        })
    }

    /// Raw content of one imported manifest file.
    pub fn import(&self, filename: &str) -> Result<&str, ConfigError> {
        self.imports
            .get(filename)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingImport(filename.to_string()))
    }
}

fn require_str(value: &Value, section: &str, field: &str) -> Result<String, ConfigError> {
    value
        .get(section)
        .and_then(|s| s.get(field))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| ConfigError::MissingField(format!("{}.{}", section, field)))
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_context() -> Value {
        json!({
            "properties": {"password": "pw1", "zone": "us-central1-a"},
            "env": {"deployment": "demo", "project": "proj1", "name": "dep1"},
            "imports": {"jenkins.yaml": "kind: Deployment\n"}
        })
    }

    #[test]
    fn test_from_value_builds_typed_context() {
        let context = DeploymentContext::from_value(&raw_context()).unwrap();

        assert_eq!(context.properties.zone, "us-central1-a");
        assert_eq!(context.env.deployment, "demo");
        assert_eq!(context.import("jenkins.yaml").unwrap(), "kind: Deployment\n");
    }

    #[test]
    fn test_from_value_names_missing_property() {
        let mut raw = raw_context();
        raw["properties"].as_object_mut().unwrap().remove("password");

        let err = DeploymentContext::from_value(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Missing required context field: properties.password");
    }

    #[test]
    fn test_from_value_names_missing_env_field() {
        let mut raw = raw_context();
        raw["env"].as_object_mut().unwrap().remove("project");

        let err = DeploymentContext::from_value(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "env.project"));
    }

    #[test]
    fn test_from_value_requires_whole_sections() {
        let err = DeploymentContext::from_value(&json!({"env": {}})).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "properties.password"));
    }

    #[test]
    fn test_from_value_tolerates_absent_imports() {
        let mut raw = raw_context();
        raw.as_object_mut().unwrap().remove("imports");

        let context = DeploymentContext::from_value(&raw).unwrap();
        assert!(context.imports.is_empty());
    }

    #[test]
    fn test_import_lookup_missing_file() {
        let context = DeploymentContext::from_value(&raw_context()).unwrap();

        let err = context.import("ui_service.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::MissingImport(ref f) if f == "ui_service.yaml"));
    }
}

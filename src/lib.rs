//! Declarative resource configuration for a Jenkins CI environment on GKE.
//!
//! The crate is a single templating step: [`generate`] takes the deployment
//! context (input properties, engine environment, imported manifest text)
//! and returns the ordered resource list a declarative deployment engine
//! creates, dependency edges included. Nothing here performs API calls; the
//! target cluster and its type provider come from a sibling deployment step
//! and are referenced by name only.
//!
//! ```
//! use gke_jenkins_config::{generate, DeploymentContext};
//! use serde_json::json;
//!
//! let context = DeploymentContext::from_value(&json!({
//!     "properties": {"password": "pw1", "zone": "us-central1-a"},
//!     "env": {"deployment": "demo", "project": "proj1", "name": "dep1"},
//!     "imports": {
//!         "jenkins.yaml": "kind: Deployment\n",
//!         "ui_service.yaml": "kind: Service\n",
//!         "ingress.yaml": "kind: Ingress\n"
//!     }
//! }))?;
//!
//! let config = generate(&context)?;
//! assert_eq!(config.resources.len(), 8);
//! # Ok::<(), gke_jenkins_config::ConfigError>(())
//! ```

pub mod errors;
pub mod generator;
pub mod k8s;
pub mod model;
pub mod util;

pub use errors::ConfigError;
pub use generator::generate;
pub use model::{
    DeploymentContext, DeploymentEnv, JenkinsProperties, ResourceConfig, ResourceDescriptor,
    ResourceMetadata,
};

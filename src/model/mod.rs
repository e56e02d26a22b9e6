pub mod context;
pub mod resource;

pub use context::{DeploymentContext, DeploymentEnv, JenkinsProperties};
pub use resource::{ResourceConfig, ResourceDescriptor, ResourceMetadata};

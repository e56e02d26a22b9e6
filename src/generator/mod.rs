pub mod cluster;
pub mod compute;
pub mod manifests;
pub mod naming;

use tracing::debug;

use crate::errors::ConfigError;
use crate::model::{DeploymentContext, ResourceConfig};
use naming::ClusterNaming;

/// Renders the full resource configuration for one Jenkins environment.
///
/// Pure function of the context: no I/O, no engine calls, safe to invoke
/// concurrently. Returns the complete eight-resource list or the first
/// error; never a partial list.
pub fn generate(context: &DeploymentContext) -> Result<ResourceConfig, ConfigError> {
    let naming = ClusterNaming::from_env(&context.env);
    debug!("Rendering Jenkins config for cluster '{}'", naming.cluster_name());

    // --- Base resources ---
    let namespace = cluster::namespace(&naming)?;
    let image = compute::home_image()?;
    let disk = compute::home_disk(&context.properties.zone)?;
    let secret = cluster::admin_secret(&naming, &context.properties.password)?;

    let mut resources = vec![namespace, image, disk, secret];

    // --- Manifest-derived resources (deployments, services, ingresses) ---
    resources.extend(manifests::render_all(&naming, context)?);

    // --- NodePort firewall rule ---
    resources.push(compute::ingress_firewall()?);

    debug!("Rendered {} resource(s)", resources.len());
    Ok(ResourceConfig { resources })
}

/* ---------------- Tests ---------------- */

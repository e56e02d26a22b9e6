use serde_json::Value;
use tracing::debug;

use crate::errors::ConfigError;
use crate::generator::cluster::{JENKINS_NAMESPACE, NAMESPACE_RESOURCE};
use crate::generator::compute::HOME_DISK_NAME;
use crate::generator::naming::ClusterNaming;
use crate::k8s::objects::set_collection_namespace;
use crate::model::{DeploymentContext, ResourceDescriptor};

/// Which API group serves a manifest category's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiGroup {
    Core,
    Extensions,
}

/// One manifest category: the collection plural, the API group selecting the
/// collection path, and the imported files belonging to it.
struct Category {
    plural: &'static str,
    group: ApiGroup,
    filenames: &'static [&'static str],
}

/// Fixed category table, iterated in declaration order. No discovery and no
/// globbing: only the files listed here are rendered.
const CATEGORIES: &[Category] = &[
    Category {
        plural: "deployments",
        group: ApiGroup::Extensions,
        filenames: &["jenkins.yaml"],
    },
    Category {
        plural: "services",
        group: ApiGroup::Core,
        filenames: &["ui_service.yaml"],
    },
    Category {
        plural: "ingresses",
        group: ApiGroup::Extensions,
        filenames: &["ingress.yaml"],
    },
];

/// Renders every manifest-derived resource, in category order.
pub fn render_all(
    naming: &ClusterNaming,
    context: &DeploymentContext,
) -> Result<Vec<ResourceDescriptor>, ConfigError> {
    let mut resources = Vec::new();
    for category in CATEGORIES {
        for filename in category.filenames {
            resources.push(render_one(naming, context, category, filename)?);
        }
    }
    Ok(resources)
}

/// Parses one imported manifest and wraps it in a descriptor targeting its
/// category's collection. Whatever namespace the manifest declared, the
/// payload lands in the Jenkins namespace.
fn render_one(
    naming: &ClusterNaming,
    context: &DeploymentContext,
    category: &Category,
    filename: &str,
) -> Result<ResourceDescriptor, ConfigError> {
    let text = context.import(filename)?;
    let mut properties: Value =
        serde_yaml::from_str(text).map_err(|source| ConfigError::ManifestParse {
            filename: filename.to_string(),
            source,
        })?;

    if !properties.is_object() {
        return Err(ConfigError::ManifestShape(filename.to_string()));
    }
    set_collection_namespace(&mut properties, JENKINS_NAMESPACE);

    let type_ = match category.group {
        ApiGroup::Core => naming.core_collection(category.plural),
        ApiGroup::Extensions => naming.extensions_collection(category.plural),
    };
    let name = format!("{}_{}", context.env.name, filename);
    debug!("Rendered manifest resource '{}' from '{}'", name, filename);

    Ok(ResourceDescriptor::new(name, type_, properties)
        .depends_on([NAMESPACE_RESOURCE, HOME_DISK_NAME]))
}

/* ---------------- Tests ---------------- */

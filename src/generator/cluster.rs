use std::collections::BTreeMap;

use crate::errors::ConfigError;
use crate::generator::compute::HOME_IMAGE_NAME;
use crate::generator::naming::ClusterNaming;
use crate::k8s::objects::{
    object_payload, set_collection_namespace, ByteString, Namespace, ObjectMeta, Secret,
};
use crate::model::ResourceDescriptor;
use crate::util::bootstrap;

/// Resource name of the namespace all Jenkins objects land in.
pub const NAMESPACE_RESOURCE: &str = "jenkins-namespace";

/// Resource name of the bootstrap credential secret.
pub const SECRET_RESOURCE: &str = "jenkins-secret";

/// Kubernetes namespace the environment deploys into.
pub const JENKINS_NAMESPACE: &str = "jenkins";

/// Namespace descriptor. Its prerequisites are the cluster and type provider
/// from the sibling deployment step plus the home image; the first two never
/// appear in this resource list.
pub fn namespace(naming: &ClusterNaming) -> Result<ResourceDescriptor, ConfigError> {
    let object = Namespace {
        metadata: ObjectMeta {
            name: Some(JENKINS_NAMESPACE.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    Ok(ResourceDescriptor::new(
        NAMESPACE_RESOURCE,
        naming.namespaces_collection(),
        object_payload(&object)?,
    )
    .depends_on([
        naming.cluster_name(),
        naming.type_name(),
        HOME_IMAGE_NAME.to_string(),
    ]))
}

/// Opaque secret carrying the admin bootstrap options. `data.options` holds
/// the raw options string; `ByteString` puts the standard padded base64 on
/// the wire.
pub fn admin_secret(
    naming: &ClusterNaming,
    password: &str,
) -> Result<ResourceDescriptor, ConfigError> {
    let options = bootstrap::options_string(password);

    let mut data = BTreeMap::new();
    data.insert("options".to_string(), ByteString(options.into_bytes()));

    let object = Secret {
        metadata: ObjectMeta {
            name: Some(JENKINS_NAMESPACE.to_string()),
            ..Default::default()
        },
        type_: Some("Opaque".to_string()),
        data: Some(data),
        ..Default::default()
    };

    let mut payload = object_payload(&object)?;
    set_collection_namespace(&mut payload, JENKINS_NAMESPACE);

    Ok(ResourceDescriptor::new(
        SECRET_RESOURCE,
        naming.core_collection("secrets"),
        payload,
    )
    .depends_on([NAMESPACE_RESOURCE]))
}

/* ---------------- Tests ---------------- */

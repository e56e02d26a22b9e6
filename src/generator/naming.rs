use crate::model::DeploymentEnv;

/// Core-API collection prefix inside a typed-provider path. The
/// `{namespace}` segment is literal text: the engine substitutes it from the
/// payload's `namespace` key.
pub const CORE_PREFIX: &str = "/api/v1/namespaces/{namespace}/";

/// Extensions-API collection prefix, used for deployments and ingresses.
pub const EXTENSIONS_PREFIX: &str = "/apis/extensions/v1beta1/namespaces/{namespace}/";

/// Name derivations for the target cluster and its type provider.
///
/// The cluster itself comes from a sibling deployment step; names are
/// derived here only so resources can reference the right provider and list
/// the cluster among their prerequisites.
#[derive(Debug, Clone)]
pub struct ClusterNaming {
    deployment: String,
    project: String,
}

impl ClusterNaming {
    pub fn from_env(env: &DeploymentEnv) -> Self {
        Self {
            deployment: env.deployment.clone(),
            project: env.project.clone(),
        }
    }

    /// `{deployment}-gke-cluster`
    pub fn cluster_name(&self) -> String {
        format!("{}-gke-cluster", self.deployment)
    }

    /// `{cluster}-type`, the name of the cluster's type provider.
    pub fn type_name(&self) -> String {
        format!("{}-type", self.cluster_name())
    }

    /// `{project}/{type-name}`, the provider reference used in type strings.
    pub fn cluster_type(&self) -> String {
        format!("{}/{}", self.project, self.type_name())
    }

    /// Collection type for a namespaced core-API plural.
    pub fn core_collection(&self, plural: &str) -> String {
        format!("{}:{}{}", self.cluster_type(), CORE_PREFIX, plural)
    }

    /// Collection type for an extensions-API plural; the provider reference
    /// gains an `-extensions` suffix.
    pub fn extensions_collection(&self, plural: &str) -> String {
        format!("{}-extensions:{}{}", self.cluster_type(), EXTENSIONS_PREFIX, plural)
    }

    /// Collection type for the cluster-scoped namespaces collection. No
    /// `{namespace}` placeholder here: namespaces are not namespaced.
    pub fn namespaces_collection(&self) -> String {
        format!("{}:/api/v1/namespaces", self.cluster_type())
    }
}

/* ---------------- Tests ---------------- */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::ResourceDescriptor;

/// Resource name of the prebuilt Jenkins home image.
pub const HOME_IMAGE_NAME: &str = "jenkins-home-image";

/// Resource name of the persistent disk carved from the home image.
pub const HOME_DISK_NAME: &str = "jenkins-home";

/// Resource name of the NodePort ingress firewall rule.
pub const FIREWALL_NAME: &str = "k8s-ingress-fw-rule";

/// Public tarball the home image is built from.
const HOME_IMAGE_SOURCE: &str =
    "https://storage.googleapis.com/solutions-public-assets/jenkins-cd/jenkins-home.tar.gz";

/// GCP HTTP(S) load-balancer source range admitted by the firewall.
const LB_SOURCE_RANGE: &str = "130.211.0.0/22";

/// NodePort the Jenkins UI service listens on.
const UI_NODE_PORT: &str = "30001";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageProperties {
    name: String,
    raw_disk: RawDisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDisk {
    source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiskProperties {
    source_image: String,
    zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirewallProperties {
    name: String,
    source_ranges: Vec<String>,
    allowed: Vec<FirewallAllowed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FirewallAllowed {
    #[serde(rename = "IPProtocol")]
    ip_protocol: String,
    ports: Vec<String>,
}

/// `compute.v1.image` descriptor for the prebuilt Jenkins home volume.
pub fn home_image() -> Result<ResourceDescriptor, ConfigError> {
    let properties = ImageProperties {
        name: HOME_IMAGE_NAME.to_string(),
        raw_disk: RawDisk {
            source: HOME_IMAGE_SOURCE.to_string(),
        },
    };

    Ok(ResourceDescriptor::new(
        HOME_IMAGE_NAME,
        "compute.v1.image",
        serde_json::to_value(properties)?,
    ))
}

/// `compute.v1.disk` descriptor holding the Jenkins home directory; carved
/// from the image and therefore ordered after it.
pub fn home_disk(zone: &str) -> Result<ResourceDescriptor, ConfigError> {
    let properties = DiskProperties {
        source_image: format!("global/images/{}", HOME_IMAGE_NAME),
        zone: zone.to_string(),
    };

    Ok(ResourceDescriptor::new(
        HOME_DISK_NAME,
        "compute.v1.disk",
        serde_json::to_value(properties)?,
    )
    .depends_on([HOME_IMAGE_NAME]))
}

/// `compute.v1.firewall` descriptor admitting load-balancer traffic to the
/// UI NodePort. The payload's `name` intentionally repeats the home image
/// name.
pub fn ingress_firewall() -> Result<ResourceDescriptor, ConfigError> {
    let properties = FirewallProperties {
        name: HOME_IMAGE_NAME.to_string(),
        source_ranges: vec![LB_SOURCE_RANGE.to_string()],
        allowed: vec![FirewallAllowed {
            ip_protocol: "TCP".to_string(),
            ports: vec![UI_NODE_PORT.to_string()],
        }],
    };

    Ok(ResourceDescriptor::new(
        FIREWALL_NAME,
        "compute.v1.firewall",
        serde_json::to_value(properties)?,
    ))
}

/* ---------------- Tests ---------------- */

//! CephCluster custom resource

use crate::resources::{KubeResource, Tabular};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// The subset of `cephclusters.ceph.rook.io/v1` this tool reads.
///
/// Unknown fields are ignored on deserialization; the object is never written
/// back, so dropping them is harmless.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize)]
#[kube(
    group = "ceph.rook.io",
    version = "v1",
    kind = "CephCluster",
    plural = "cephclusters",
    namespaced,
    status = "CephClusterStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct CephClusterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceph_version: Option<CephVersionSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir_host_path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CephVersionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CephClusterStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceph: Option<CephHealthStatus>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CephHealthStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
}

impl KubeResource for CephCluster {
    const KIND: &'static str = "CephCluster";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl CephCluster {
    pub fn phase(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn health(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.ceph.as_ref())
            .and_then(|c| c.health.as_deref())
            .unwrap_or("<none>")
    }

    pub fn message(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.message.as_deref())
            .unwrap_or("")
    }

    pub fn image(&self) -> &str {
        self.spec
            .ceph_version
            .as_ref()
            .and_then(|v| v.image.as_deref())
            .unwrap_or("<none>")
    }
}

impl Tabular for CephCluster {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "PHASE", "HEALTH", "IMAGE", "AGE", "MESSAGE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.phase().to_string(),
            self.health().to_string(),
            self.image().to_string(),
            self.age(),
            self.message().to_string(),
        ]
    }

    fn status_cells(&self) -> Vec<String> {
        vec![self.phase().to_string(), self.health().to_string()]
    }
}

//! Core traits for Kubernetes resources and the cluster API seam

use crate::error::Result;
use crate::resources::CephCluster;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::autoscaling::v1::Scale;
use k8s_openapi::api::core::v1::{ConfigMap, Pod};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Core trait that all Kubernetes resources used by rook-ceph implement
pub trait KubeResource:
    Clone + Debug + DeserializeOwned + Serialize + Send + Sync + Resource + 'static
{
    /// The Kubernetes API kind (e.g., "Pod", "Deployment")
    const KIND: &'static str;

    /// Get object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Get the resource name
    fn name(&self) -> &str {
        self.metadata()
            .name
            .as_deref()
            .unwrap_or("<unknown>")
    }

    /// Get the creation timestamp as a human-readable age string
    fn age(&self) -> String {
        self.metadata()
            .creation_timestamp
            .as_ref()
            .map(|ts| humanize_duration(ts.0))
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// Every Kubernetes API call the rook-ceph workflows make.
///
/// Implemented by [`crate::client::Clientsets`] against a live cluster. Calls
/// are namespaced explicitly; nothing falls back to the kubeconfig default.
/// A missing object must surface as an error for which
/// [`crate::error::RcError::is_not_found`] is true.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment>;

    async fn create_deployment(&self, namespace: &str, deployment: &Deployment)
        -> Result<Deployment>;

    async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()>;

    /// Read the scale subresource of a deployment
    async fn get_scale(&self, namespace: &str, name: &str) -> Result<Scale>;

    /// Replace the scale subresource of a deployment
    async fn replace_scale(&self, namespace: &str, name: &str, scale: &Scale) -> Result<Scale>;

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod>;

    /// List pods matching a label selector such as `a=b,c=d`
    async fn list_pods(&self, namespace: &str, label_selector: &str) -> Result<Vec<Pod>>;

    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<ConfigMap>;

    /// List Rook `CephCluster` resources through the Rook handle
    async fn list_ceph_clusters(&self, namespace: &str) -> Result<Vec<CephCluster>>;
}

/// Trait for resources that have a meaningful table display
pub trait Tabular: KubeResource {
    /// Column headers for table output
    fn headers() -> Vec<&'static str>;

    /// Row values for table output
    fn row(&self) -> Vec<String>;

    /// Cell values that should be colored by status category
    fn status_cells(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Convert a chrono DateTime to a human-readable duration string
pub fn humanize_duration(time: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(time);

    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds().max(0))
    }
}

/// Status values that indicate a healthy state
pub const HEALTHY_STATUSES: &[&str] = &["Running", "Ready", "Connected", "HEALTH_OK"];

/// Status values that indicate a warning state
pub const WARNING_STATUSES: &[&str] = &[
    "Pending",
    "Progressing",
    "Updating",
    "Connecting",
    "Deleting",
    "HEALTH_WARN",
];

/// Status values that indicate an error state
pub const ERROR_STATUSES: &[&str] = &["Failed", "Failure", "Error", "HEALTH_ERR"];

/// Determine status category for coloring
pub fn status_category(status: &str) -> StatusCategory {
    if HEALTHY_STATUSES.contains(&status) {
        StatusCategory::Healthy
    } else if ERROR_STATUSES.contains(&status) {
        StatusCategory::Error
    } else if WARNING_STATUSES.contains(&status) {
        StatusCategory::Warning
    } else {
        StatusCategory::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Healthy,
    Warning,
    Error,
    Unknown,
}

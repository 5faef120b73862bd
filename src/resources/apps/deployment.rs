//! Deployment resource implementation and debug-copy construction

use crate::error::{RcError, Result};
use crate::resources::KubeResource;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Label that tells the Rook operator to leave a resource alone
pub const DO_NOT_RECONCILE_LABEL: &str = "ceph.rook.io/do-not-reconcile";

/// Pod label carrying the Ceph daemon role (`mon`, `osd`, `mgr`, ...)
pub const DAEMON_TYPE_LABEL: &str = "ceph_daemon_type";

/// Pod label carrying the Ceph daemon instance id
pub const DAEMON_ID_LABEL: &str = "ceph_daemon_id";

/// Entrypoint of a debug container; keeps it alive without the daemon
pub const DEBUG_COMMAND: [&str; 2] = ["sleep", "infinity"];

const DEBUG_SUFFIX: &str = "-debug";

impl KubeResource for Deployment {
    const KIND: &'static str = "Deployment";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

/// Name of the debug copy of a deployment
pub fn debug_deployment_name(name: &str) -> String {
    format!("{name}{DEBUG_SUFFIX}")
}

/// Label selector matching the daemon pods of a Rook deployment.
///
/// Built from the pod template's `ceph_daemon_type` and `ceph_daemon_id`
/// labels, so it matches pods of the deployment and of its debug copy alike.
pub fn daemon_selector(deploy: &Deployment) -> Result<String> {
    let labels = deploy
        .spec
        .as_ref()
        .and_then(|s| s.template.metadata.as_ref())
        .and_then(|m| m.labels.as_ref());

    let label = |key: &str| {
        labels
            .and_then(|l| l.get(key))
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| RcError::InvalidDeployment {
                name: deploy.name().to_string(),
                reason: format!("pod template has no '{key}' label"),
            })
    };

    let daemon_type = label(DAEMON_TYPE_LABEL)?;
    let daemon_id = label(DAEMON_ID_LABEL)?;

    Ok(format!(
        "{DAEMON_TYPE_LABEL}={daemon_type},{DAEMON_ID_LABEL}={daemon_id}"
    ))
}

/// Build the `<name>-debug` copy of a daemon deployment.
///
/// The first container gets the alternate image (if any), loses its liveness
/// and startup probes, and runs [`DEBUG_COMMAND`] with no args. The copy is
/// labelled [`DO_NOT_RECONCILE_LABEL`]. The original is left untouched.
pub fn debug_deployment(
    original: &Deployment,
    namespace: &str,
    alternate_image: Option<&str>,
) -> Result<Deployment> {
    let name = original.name().to_string();
    let mut spec = original
        .spec
        .clone()
        .ok_or_else(|| RcError::InvalidDeployment {
            name: name.clone(),
            reason: "deployment has no spec".to_string(),
        })?;

    let container = spec
        .template
        .spec
        .as_mut()
        .and_then(|pod_spec| pod_spec.containers.first_mut())
        .ok_or_else(|| RcError::InvalidDeployment {
            name: name.clone(),
            reason: "pod template has no containers".to_string(),
        })?;

    into_debug_container(container, alternate_image);

    let mut labels: BTreeMap<String, String> =
        original.metadata.labels.clone().unwrap_or_default();
    labels.insert(DO_NOT_RECONCILE_LABEL.to_string(), "true".to_string());

    Ok(Deployment {
        metadata: ObjectMeta {
            name: Some(debug_deployment_name(&name)),
            namespace: Some(namespace.to_string()),
            labels: Some(labels),
            ..Default::default()
        },
        spec: Some(spec),
        status: None,
    })
}

fn into_debug_container(container: &mut Container, alternate_image: Option<&str>) {
    if let Some(image) = alternate_image.filter(|i| !i.is_empty()) {
        container.image = Some(image.to_string());
    }

    container.liveness_probe = None;
    container.startup_probe = None;
    container.command = Some(DEBUG_COMMAND.iter().map(|s| s.to_string()).collect());
    container.args = None;
}

/// Image of the first container, if any
pub fn main_image(deploy: &Deployment) -> Option<&str> {
    deploy
        .spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
        .and_then(|s| s.containers.first())
        .and_then(|c| c.image.as_deref())
}

//! Pod resource implementation

use crate::resources::KubeResource;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for Pod {
    const KIND: &'static str = "Pod";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

/// Whether the pod reports the Running phase and is not being deleted
pub fn is_running(pod: &Pod) -> bool {
    !is_terminating(pod) && phase(pod) == "Running"
}

/// Whether the API server has stamped a deletion timestamp on the pod
pub fn is_terminating(pod: &Pod) -> bool {
    pod.metadata.deletion_timestamp.is_some()
}

/// Get the pod phase as reported by the kubelet
pub fn phase(pod: &Pod) -> &str {
    pod.status
        .as_ref()
        .and_then(|s| s.phase.as_deref())
        .unwrap_or("Unknown")
}

/// Get a one-word status for log lines, preferring container waiting reasons
pub fn display_status(pod: &Pod) -> String {
    if is_terminating(pod) {
        return "Terminating".to_string();
    }

    let waiting_reason = pod
        .status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .and_then(|statuses| {
            statuses.iter().find_map(|cs| {
                cs.state
                    .as_ref()
                    .and_then(|state| state.waiting.as_ref())
                    .and_then(|waiting| waiting.reason.clone())
            })
        });

    waiting_reason.unwrap_or_else(|| phase(pod).to_string())
}

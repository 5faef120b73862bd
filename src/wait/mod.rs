//! Fixed-interval polling for pod lifecycle transitions

use crate::error::{RcError, Result};
use crate::resources::core::pod::{display_status, is_running};
use crate::resources::{ClusterApi, KubeResource};
use k8s_openapi::api::core::v1::Pod;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Attempts made before a wait gives up
pub const DEFAULT_ATTEMPTS: u32 = 60;

/// Pause between two attempts
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// How long a wait may take: a fixed number of attempts at a fixed interval.
///
/// There is no backoff; the budget is the only timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitBudget {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for WaitBudget {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl WaitBudget {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Poll until `condition` yields a value or the budget runs out.
    ///
    /// The condition returns:
    /// - `Ok(Some(T))` when met (polling stops and `T` is returned)
    /// - `Ok(None)` when not met yet (polling continues)
    /// - `Err(e)` to abort immediately
    ///
    /// No sleep follows the last attempt. Exhaustion yields
    /// [`RcError::Timeout`] carrying `description`.
    pub async fn poll<F, Fut, T>(&self, description: &str, mut condition: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        for attempt in 1..=self.attempts {
            if let Some(value) = condition().await? {
                return Ok(value);
            }

            if attempt < self.attempts {
                tokio::time::sleep(self.interval).await;
            }
        }

        Err(RcError::Timeout(description.to_string()))
    }
}

/// Wait for a pod matching `label_selector` to be Running.
///
/// Pods carrying a deletion timestamp are skipped. List failures count as
/// "not yet" and are retried.
pub async fn wait_for_pod_running<C>(
    cluster: &C,
    namespace: &str,
    label_selector: &str,
    budget: WaitBudget,
) -> Result<Pod>
where
    C: ClusterApi + ?Sized,
{
    let description = format!("pod with labels {label_selector} to be running");

    budget
        .poll(&description, move || async move {
            let pods = match cluster.list_pods(namespace, label_selector).await {
                Ok(pods) => pods,
                Err(e) => {
                    debug!(error = %e, "listing pods failed, retrying");
                    Vec::new()
                }
            };

            if let Some(pod) = pods.iter().find(|p| is_running(p)) {
                return Ok(Some(pod.clone()));
            }

            for pod in &pods {
                debug!(pod = pod.name(), status = %display_status(pod), "pod not running yet");
            }
            info!(
                "waiting for pod with label {:?} in namespace {:?} to be running",
                label_selector, namespace
            );
            Ok(None)
        })
        .await
}

/// Wait for the pod named `pod_name` to disappear.
///
/// Success is a not-found answer from the API; any other error is treated
/// like "still there".
pub async fn wait_for_pod_deletion<C>(
    cluster: &C,
    namespace: &str,
    pod_name: &str,
    budget: WaitBudget,
) -> Result<()>
where
    C: ClusterApi + ?Sized,
{
    let description = format!("pod {pod_name} to be deleted");

    budget
        .poll(&description, move || async move {
            match cluster.get_pod(namespace, pod_name).await {
                Err(e) if e.is_not_found() => Ok(Some(())),
                Err(e) => {
                    debug!(error = %e, "pod lookup failed, retrying");
                    info!("waiting for pod {:?} to be deleted", pod_name);
                    Ok(None)
                }
                Ok(_) => {
                    info!("waiting for pod {:?} to be deleted", pod_name);
                    Ok(None)
                }
            }
        })
        .await
}

/// Wait until no pod matches `label_selector`.
///
/// Used when the pod name is not known up front. A failed list is retried.
pub async fn wait_for_pods_gone<C>(
    cluster: &C,
    namespace: &str,
    label_selector: &str,
    budget: WaitBudget,
) -> Result<()>
where
    C: ClusterApi + ?Sized,
{
    let description = format!("pods with labels {label_selector} to be deleted");

    budget
        .poll(&description, move || async move {
            match cluster.list_pods(namespace, label_selector).await {
                Ok(pods) if pods.is_empty() => Ok(Some(())),
                Ok(pods) => {
                    info!(
                        "waiting for {} pod(s) with label {:?} to be deleted",
                        pods.len(),
                        label_selector
                    );
                    Ok(None)
                }
                Err(e) => {
                    debug!(error = %e, "listing pods failed, retrying");
                    Ok(None)
                }
            }
        })
        .await
}

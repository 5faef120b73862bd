//! Debug command implementation
//!
//! `debug start` swaps a Ceph daemon deployment for a `-debug` copy whose
//! main container sleeps forever, so an operator can exec into it with the
//! daemon stopped. `debug stop` reverses that.
//!
//! Nothing here is transactional. If a step fails after the original was
//! scaled down, the original stays at zero replicas. Starting twice fails
//! on the already existing `-debug` deployment.

use crate::cli::{DebugArgs, DebugCommand};
use crate::client::get_clientsets;
use crate::commands::scale::set_deployment_scale;
use crate::config::Settings;
use crate::error::{RcError, Result};
use crate::resources::apps::deployment::{
    daemon_selector, debug_deployment, debug_deployment_name, main_image,
};
use crate::resources::{ClusterApi, KubeResource};
use crate::wait::{wait_for_pod_deletion, wait_for_pod_running, wait_for_pods_gone, WaitBudget};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use tracing::{info, warn};

/// Execute debug command
pub async fn run_debug(settings: &Settings, args: &DebugArgs) -> Result<()> {
    let clientsets = get_clientsets(settings.kubeconfig.as_deref()).await?;

    match &args.command {
        DebugCommand::Start(start) => {
            let pod = start_debug(
                &clientsets,
                &settings.namespace,
                &start.deployment,
                start.alternate_image.as_deref(),
                settings.wait,
            )
            .await?;
            println!("{}", pod.name());
        }
        DebugCommand::Stop(stop) => {
            let pod =
                stop_debug(&clientsets, &settings.namespace, &stop.deployment, settings.wait)
                    .await?;
            println!("{}", pod.name());
        }
    }

    Ok(())
}

/// Replace `deployment_name` with a sleeping `<deployment_name>-debug` copy.
///
/// Returns the Running pod of the debug deployment.
pub async fn start_debug<C>(
    cluster: &C,
    namespace: &str,
    deployment_name: &str,
    alternate_image: Option<&str>,
    budget: WaitBudget,
) -> Result<Pod>
where
    C: ClusterApi + ?Sized,
{
    let original = fetch_deployment(cluster, namespace, deployment_name).await?;

    if let Some(image) = alternate_image.filter(|i| !i.is_empty()) {
        info!("setting debug image to {}", image);
    }
    info!("setting debug command to main container");
    let debug_deploy = debug_deployment(&original, namespace, alternate_image)?;
    let debug_name = debug_deploy.name().to_string();

    let selector = daemon_selector(&original)?;
    let current = wait_for_pod_running(cluster, namespace, &selector, budget).await?;

    set_deployment_scale(cluster, namespace, deployment_name, 0).await?;
    info!("deployment {} scaled down", deployment_name);

    // On a re-run the daemon labels already match the debug pod, which
    // scaling the original never removes.
    if current.name().starts_with(&format!("{debug_name}-")) {
        warn!("pod {} belongs to {}, not waiting for it", current.name(), debug_name);
    } else {
        info!("waiting for the deployment pod {} to be deleted", current.name());
        wait_for_pod_deletion(cluster, namespace, current.name(), budget).await?;
    }

    cluster
        .create_deployment(namespace, &debug_deploy)
        .await
        .map_err(|e| RcError::CreateDeployment {
            name: debug_name.clone(),
            source: Box::new(e),
        })?;
    let image = main_image(&debug_deploy).unwrap_or("<none>");
    info!("created debug deployment {} with image {}", debug_name, image);

    info!("ensure the debug deployment {} is scaled up", debug_name);
    set_deployment_scale(cluster, namespace, &debug_name, 1).await?;

    let pod = wait_for_pod_running(cluster, namespace, &selector, budget).await?;
    info!("pod {} is ready for debugging", pod.name());

    Ok(pod)
}

/// Remove `<deployment_name>-debug` and bring `deployment_name` back.
///
/// Returns the Running pod of the restored deployment.
pub async fn stop_debug<C>(
    cluster: &C,
    namespace: &str,
    deployment_name: &str,
    budget: WaitBudget,
) -> Result<Pod>
where
    C: ClusterApi + ?Sized,
{
    let original = fetch_deployment(cluster, namespace, deployment_name).await?;
    let selector = daemon_selector(&original)?;
    let debug_name = debug_deployment_name(deployment_name);

    cluster
        .delete_deployment(namespace, &debug_name)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                RcError::NotFound {
                    kind: Deployment::KIND.to_string(),
                    name: debug_name.clone(),
                }
            } else {
                e
            }
        })?;
    info!("removed debug deployment {}", debug_name);

    wait_for_pods_gone(cluster, namespace, &selector, budget).await?;

    set_deployment_scale(cluster, namespace, deployment_name, 1).await?;
    info!("deployment {} scaled up", deployment_name);

    let pod = wait_for_pod_running(cluster, namespace, &selector, budget).await?;
    info!("pod {} is running", pod.name());

    Ok(pod)
}

async fn fetch_deployment<C>(cluster: &C, namespace: &str, name: &str) -> Result<Deployment>
where
    C: ClusterApi + ?Sized,
{
    info!("fetching the deployment {} to be running", name);
    let deployment = cluster
        .get_deployment(namespace, name)
        .await
        .map_err(|e| RcError::DeploymentMissing {
            name: name.to_string(),
            source: Box::new(e),
        })?;
    info!("deployment {} exists", name);

    Ok(deployment)
}

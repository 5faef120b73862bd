//! Kubernetes client bootstrap

use crate::error::{RcError, Result};
use crate::resources::{CephCluster, ClusterApi};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::autoscaling::v1::Scale;
use k8s_openapi::api::core::v1::{ConfigMap, Pod};
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use std::path::Path;
use tracing::debug;

/// Handle for Rook custom resources
#[derive(Clone)]
pub struct RookClient {
    client: Client,
}

impl RookClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `cephclusters.ceph.rook.io` in `namespace`
    pub fn ceph_clusters(&self, namespace: &str) -> Api<CephCluster> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

/// The API handles one invocation works with; built once, never mutated
#[derive(Clone)]
pub struct Clientsets {
    /// Raw client configuration the other handles were built from
    pub kube_config: Config,
    /// Core and apps API access
    pub kube: Client,
    /// Rook custom resources
    pub rook: RookClient,
}

/// Build the client set from `kubeconfig`, or from the default loading rules
/// (`KUBECONFIG`, `~/.kube/config`, in-cluster) when no path is given
pub async fn get_clientsets(kubeconfig: Option<&Path>) -> Result<Clientsets> {
    let kube_config = load_config(kubeconfig).await?;
    debug!(cluster_url = %kube_config.cluster_url, "loaded kubeconfig");

    let kube = Client::try_from(kube_config.clone())?;
    let rook = RookClient::new(kube.clone());

    Ok(Clientsets {
        kube_config,
        kube,
        rook,
    })
}

/// Load Kubernetes configuration
async fn load_config(kubeconfig: Option<&Path>) -> Result<Config> {
    match kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                RcError::Config(format!(
                    "Failed to read kubeconfig {}: {e}",
                    path.display()
                ))
            })?;

            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| RcError::Config(format!("Failed to load kubeconfig: {e}")))
        }
        None => Config::infer()
            .await
            .map_err(|e| RcError::Config(format!("Failed to load kubeconfig: {e}"))),
    }
}

impl Clientsets {
    fn deployments(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.kube.clone(), namespace)
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.kube.clone(), namespace)
    }
}

#[async_trait]
impl ClusterApi for Clientsets {
    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment> {
        debug!(namespace, name, "get deployment");
        Ok(self.deployments(namespace).get(name).await?)
    }

    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        debug!(namespace, name = ?deployment.metadata.name, "create deployment");
        Ok(self
            .deployments(namespace)
            .create(&PostParams::default(), deployment)
            .await?)
    }

    async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()> {
        debug!(namespace, name, "delete deployment");
        self.deployments(namespace)
            .delete(name, &DeleteParams::foreground())
            .await?;
        Ok(())
    }

    async fn get_scale(&self, namespace: &str, name: &str) -> Result<Scale> {
        debug!(namespace, name, "get scale");
        Ok(self.deployments(namespace).get_scale(name).await?)
    }

    async fn replace_scale(&self, namespace: &str, name: &str, scale: &Scale) -> Result<Scale> {
        debug!(namespace, name, "replace scale");
        let data = serde_json::to_vec(scale)?;
        Ok(self
            .deployments(namespace)
            .replace_scale(name, &PostParams::default(), data)
            .await?)
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        debug!(namespace, name, "get pod");
        Ok(self.pods(namespace).get(name).await?)
    }

    async fn list_pods(&self, namespace: &str, label_selector: &str) -> Result<Vec<Pod>> {
        debug!(namespace, label_selector, "list pods");
        let lp = ListParams::default().labels(label_selector);
        Ok(self.pods(namespace).list(&lp).await?.items)
    }

    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<ConfigMap> {
        debug!(namespace, name, "get configmap");
        let api: Api<ConfigMap> = Api::namespaced(self.kube.clone(), namespace);
        Ok(api.get(name).await?)
    }

    async fn list_ceph_clusters(&self, namespace: &str) -> Result<Vec<CephCluster>> {
        debug!(namespace, "list cephclusters");
        Ok(self
            .rook
            .ceph_clusters(namespace)
            .list(&ListParams::default())
            .await?
            .items)
    }
}

//! Mons command implementation

use crate::cli::OutputFormat;
use crate::client::get_clientsets;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{format_json, format_yaml};
use crate::resources::core::configmap::{
    join_addresses, mon_endpoints, MonEndpoint, MON_ENDPOINTS_CONFIGMAP,
};
use crate::resources::ClusterApi;

/// Print the mon endpoints of the CephCluster namespace
pub async fn run_mons(settings: &Settings) -> Result<()> {
    let clientsets = get_clientsets(settings.kubeconfig.as_deref()).await?;
    let endpoints = get_mon_endpoints(&clientsets, &settings.namespace).await?;

    let output = match settings.output {
        OutputFormat::Table => join_addresses(&endpoints),
        OutputFormat::Json => format_json(&endpoints)?,
        OutputFormat::Yaml => format_yaml(&endpoints)?,
    };

    println!("{}", output);
    Ok(())
}

/// Read the operator's mon endpoints ConfigMap in `namespace`
pub async fn get_mon_endpoints<C>(cluster: &C, namespace: &str) -> Result<Vec<MonEndpoint>>
where
    C: ClusterApi + ?Sized,
{
    let cm = cluster
        .get_config_map(namespace, MON_ENDPOINTS_CONFIGMAP)
        .await?;
    mon_endpoints(&cm)
}

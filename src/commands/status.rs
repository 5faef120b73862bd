//! Status command implementation

use crate::cli::OutputFormat;
use crate::client::get_clientsets;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{format_json, format_table, format_yaml};
use crate::resources::{CephCluster, ClusterApi};

/// Print the CephClusters of the configured namespace
pub async fn run_status(settings: &Settings) -> Result<()> {
    let clientsets = get_clientsets(settings.kubeconfig.as_deref()).await?;
    let clusters = clientsets.list_ceph_clusters(&settings.namespace).await?;

    println!("{}", render_status(&clusters, settings.output)?);
    Ok(())
}

/// Render CephClusters in the requested format
pub fn render_status(clusters: &[CephCluster], output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Table => format_table(clusters),
        OutputFormat::Json => format_json(clusters)?,
        OutputFormat::Yaml => format_yaml(clusters)?,
    })
}

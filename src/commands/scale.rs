//! Deployment scale helper

use crate::error::{RcError, Result};
use crate::resources::ClusterApi;
use k8s_openapi::api::autoscaling::v1::{Scale, ScaleSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::debug;

/// Set a deployment's replica count through its scale subresource.
///
/// The template spec is never patched. API failures are wrapped with the
/// deployment name and returned without retry.
pub async fn set_deployment_scale<C>(
    cluster: &C,
    namespace: &str,
    name: &str,
    replicas: i32,
) -> Result<()>
where
    C: ClusterApi + ?Sized,
{
    let scale = Scale {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ScaleSpec {
            replicas: Some(replicas),
        }),
        status: None,
    };

    debug!(deployment = name, namespace, replicas, "updating scale");
    cluster
        .replace_scale(namespace, name, &scale)
        .await
        .map_err(|e| RcError::Scale {
            name: name.to_string(),
            source: Box::new(e),
        })?;

    Ok(())
}

/// Read back the desired replica count of a deployment
pub async fn deployment_replicas<C>(cluster: &C, namespace: &str, name: &str) -> Result<i32>
where
    C: ClusterApi + ?Sized,
{
    let scale = cluster.get_scale(namespace, name).await?;
    Ok(scale.spec.and_then(|s| s.replicas).unwrap_or(0))
}

//! ConfigMap resource implementation and the Rook mon endpoints format

use crate::error::{RcError, Result};
use crate::resources::KubeResource;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;

/// ConfigMap the Rook operator keeps the current monitor addresses in
pub const MON_ENDPOINTS_CONFIGMAP: &str = "rook-ceph-mon-endpoints";

/// Key inside [`MON_ENDPOINTS_CONFIGMAP`] holding `a=host:port,b=host:port`
pub const MON_ENDPOINTS_KEY: &str = "data";

impl KubeResource for ConfigMap {
    const KIND: &'static str = "ConfigMap";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

/// A single Ceph monitor as recorded by the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonEndpoint {
    /// Mon id (`a`, `b`, ...); empty when the entry carried no id
    pub name: String,
    /// `host:port` the mon listens on
    pub address: String,
}

/// Parse the operator's `a=10.0.0.1:6789,b=10.0.0.2:6789` format
pub fn parse_mon_endpoints(data: &str) -> Result<Vec<MonEndpoint>> {
    let endpoints: Vec<MonEndpoint> = data
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((name, address)) => MonEndpoint {
                name: name.trim().to_string(),
                address: address.trim().to_string(),
            },
            None => MonEndpoint {
                name: String::new(),
                address: entry.to_string(),
            },
        })
        .collect();

    if let Some(bad) = endpoints.iter().find(|e| e.address.is_empty()) {
        return Err(RcError::MonEndpoints(format!(
            "mon {} has no address",
            bad.name
        )));
    }

    if endpoints.is_empty() {
        return Err(RcError::MonEndpoints(
            "mon endpoints configmap data is empty".to_string(),
        ));
    }

    Ok(endpoints)
}

/// Extract the mon endpoints from the operator's ConfigMap
pub fn mon_endpoints(cm: &ConfigMap) -> Result<Vec<MonEndpoint>> {
    let data = cm
        .data
        .as_ref()
        .and_then(|d| d.get(MON_ENDPOINTS_KEY))
        .ok_or_else(|| {
            RcError::MonEndpoints(format!(
                "configmap {} has no '{}' key",
                cm.name(),
                MON_ENDPOINTS_KEY
            ))
        })?;

    parse_mon_endpoints(data)
}

/// Render endpoints the way `ceph -m` expects them
pub fn join_addresses(endpoints: &[MonEndpoint]) -> String {
    endpoints
        .iter()
        .map(|e| e.address.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

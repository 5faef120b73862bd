//! Kubernetes resource types and traits

pub mod traits;
pub mod core;
pub mod apps;
pub mod ceph;

pub use traits::*;
pub use ceph::cluster::{CephCluster, CephClusterSpec, CephClusterStatus};

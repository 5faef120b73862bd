//! Core Kubernetes resources (v1)

pub mod configmap;
pub mod pod;

//! Workload resources (apps/v1)

pub mod deployment;

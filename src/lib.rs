//! rook-ceph - troubleshooting tools for Rook-managed Ceph clusters

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod resources;
pub mod wait;

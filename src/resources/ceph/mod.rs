//! Rook custom resources (ceph.rook.io)

pub mod cluster;

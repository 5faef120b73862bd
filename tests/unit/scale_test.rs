//! Tests for src/commands/scale.rs - set_deployment_scale

use crate::common::{rook_daemon_deployment, FakeCluster, NAMESPACE};
use rook_ceph::commands::{deployment_replicas, set_deployment_scale};
use rook_ceph::error::RcError;

fn cluster_with_mon() -> FakeCluster {
    let cluster = FakeCluster::new();
    cluster.add_deployment(rook_daemon_deployment(
        "rook-ceph-mon-a",
        NAMESPACE,
        "mon",
        "a",
        "quay.io/ceph/ceph:v18",
    ));
    cluster
}

#[tokio::test]
async fn test_scale_then_read_back() {
    let cluster = cluster_with_mon();

    for replicas in [0, 3, 1] {
        set_deployment_scale(&cluster, NAMESPACE, "rook-ceph-mon-a", replicas)
            .await
            .unwrap();
        let read_back = deployment_replicas(&cluster, NAMESPACE, "rook-ceph-mon-a")
            .await
            .unwrap();
        assert_eq!(read_back, replicas);
    }
}

#[tokio::test]
async fn test_scale_uses_scale_subresource() {
    let cluster = cluster_with_mon();

    set_deployment_scale(&cluster, NAMESPACE, "rook-ceph-mon-a", 0)
        .await
        .unwrap();

    assert_eq!(
        cluster.calls(),
        vec!["replace_scale rook-ceph/rook-ceph-mon-a=0".to_string()]
    );
    assert!(cluster.pods().is_empty());
}

#[tokio::test]
async fn test_scale_missing_deployment_wraps_error() {
    let cluster = FakeCluster::new();

    let err = set_deployment_scale(&cluster, NAMESPACE, "rook-ceph-osd-9", 1)
        .await
        .unwrap_err();

    match &err {
        RcError::Scale { name, source } => {
            assert_eq!(name, "rook-ceph-osd-9");
            assert!(source.is_not_found());
        }
        other => panic!("expected scale error, got {other:?}"),
    }
    assert!(err.to_string().contains("rook-ceph-osd-9"));
    assert_eq!(cluster.count_calls("replace_scale"), 1);
}

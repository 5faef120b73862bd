//! Tests for mon endpoint parsing and the mons command

use crate::common::{mon_endpoints_configmap, FakeCluster, NAMESPACE};
use rook_ceph::commands::get_mon_endpoints;
use rook_ceph::error::RcError;
use rook_ceph::resources::core::configmap::{join_addresses, parse_mon_endpoints, MonEndpoint};

#[test]
fn test_parse_mon_endpoints() {
    let endpoints =
        parse_mon_endpoints("a=10.96.10.1:6789,b=10.96.10.2:6789,c=10.96.10.3:6789").unwrap();

    assert_eq!(endpoints.len(), 3);
    assert_eq!(
        endpoints[0],
        MonEndpoint {
            name: "a".to_string(),
            address: "10.96.10.1:6789".to_string(),
        }
    );
    assert_eq!(endpoints[2].name, "c");
    assert_eq!(
        join_addresses(&endpoints),
        "10.96.10.1:6789,10.96.10.2:6789,10.96.10.3:6789"
    );
}

#[test]
fn test_parse_mon_endpoints_tolerates_whitespace_and_trailing_comma() {
    let endpoints = parse_mon_endpoints(" a=10.0.0.1:6789 , b = 10.0.0.2:3300,").unwrap();

    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[1].name, "b");
    assert_eq!(endpoints[1].address, "10.0.0.2:3300");
}

#[test]
fn test_parse_mon_endpoints_without_ids() {
    let endpoints = parse_mon_endpoints("10.0.0.1:6789").unwrap();
    assert_eq!(endpoints[0].name, "");
    assert_eq!(endpoints[0].address, "10.0.0.1:6789");
}

#[test]
fn test_parse_mon_endpoints_rejects_empty_data() {
    assert!(matches!(parse_mon_endpoints(""), Err(RcError::MonEndpoints(_))));
    assert!(matches!(parse_mon_endpoints(" , "), Err(RcError::MonEndpoints(_))));
}

#[test]
fn test_parse_mon_endpoints_rejects_missing_address() {
    let err = parse_mon_endpoints("a=10.0.0.1:6789,b=").unwrap_err();
    assert!(err.to_string().contains("mon b has no address"));
}

#[tokio::test]
async fn test_get_mon_endpoints_reads_operator_configmap() {
    let cluster = FakeCluster::new();
    cluster.add_config_map(mon_endpoints_configmap(NAMESPACE, "a=10.0.0.1:6789"));

    let endpoints = get_mon_endpoints(&cluster, NAMESPACE).await.unwrap();

    assert_eq!(join_addresses(&endpoints), "10.0.0.1:6789");
    assert_eq!(
        cluster.calls(),
        vec!["get_config_map rook-ceph/rook-ceph-mon-endpoints".to_string()]
    );
}

#[tokio::test]
async fn test_get_mon_endpoints_missing_configmap() {
    let cluster = FakeCluster::new();

    let err = get_mon_endpoints(&cluster, "other-ns").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_mon_endpoints_missing_data_key() {
    let cluster = FakeCluster::new();
    let mut cm = mon_endpoints_configmap(NAMESPACE, "");
    cm.data = Some([("maxMonId".to_string(), "2".to_string())].into());
    cluster.add_config_map(cm);

    let err = get_mon_endpoints(&cluster, NAMESPACE).await.unwrap_err();
    assert!(err.to_string().contains("has no 'data' key"));
}

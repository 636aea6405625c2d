//! Integration tests for the kubectl client
//!
//! These tests require a reachable cluster and a kubectl binary on PATH.
//! Set KUBECTL_TEST_NAMESPACE to a namespace that exists to run them.

use kubectl_client::{ClusterClient, KubectlClient, KubectlError};

fn test_namespace() -> String {
    std::env::var("KUBECTL_TEST_NAMESPACE").unwrap_or_else(|_| "default".to_string())
}

#[test]
#[ignore] // Requires a cluster
fn test_list_deployments() {
    let client = KubectlClient::new();
    let deployments = client
        .list_deployments(&test_namespace())
        .expect("Failed to list deployments");
    println!("Found {} deployments", deployments.len());
}

#[test]
#[ignore] // Requires a cluster
fn test_missing_namespace_is_not_found() {
    let client = KubectlClient::new();
    let result = client.get_sleep_infos("tenant-power-no-such-namespace");
    assert!(matches!(result, Err(KubectlError::NotFound(_))));
}

#[test]
#[ignore] // Requires a cluster with the SleepInfo CRD installed
fn test_get_sleep_infos() {
    let client = KubectlClient::new();
    let sleep_infos = client
        .get_sleep_infos(&test_namespace())
        .expect("Failed to list SleepInfos");
    println!("Found {} SleepInfos", sleep_infos.len());
}

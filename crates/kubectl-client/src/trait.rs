//! ClusterClient trait for mocking
//!
//! Abstracts the kubectl invocations so CLI logic can be unit-tested
//! against an in-memory implementation instead of a cluster.

use crate::error::KubectlError;
use crate::models::Deployment;
use crds::SleepInfo;

/// Cluster operations used by the tool.
///
/// Read methods return [`KubectlError::NotFound`] when the namespace (or
/// the SleepInfo resource type) does not exist; callers treat that as an
/// empty result. Deletes follow kubectl `--ignore-not-found` semantics:
/// deleting an absent object succeeds.
pub trait ClusterClient {
    /// List the SleepInfos of a namespace.
    fn get_sleep_infos(&self, namespace: &str) -> Result<Vec<SleepInfo>, KubectlError>;

    /// List the Deployments of a namespace.
    fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, KubectlError>;

    /// List the Secret names of a namespace.
    fn list_secret_names(&self, namespace: &str) -> Result<Vec<String>, KubectlError>;

    /// Apply a multi-document YAML manifest; returns kubectl's stdout.
    fn apply_manifest(&self, manifest: &str) -> Result<String, KubectlError>;

    /// Delete one SleepInfo, succeeding when it is already gone.
    fn delete_sleep_info(&self, namespace: &str, name: &str) -> Result<(), KubectlError>;

    /// Delete one Secret, succeeding when it is already gone.
    fn delete_secret(&self, namespace: &str, name: &str) -> Result<(), KubectlError>;
}

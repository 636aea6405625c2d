//! Mock ClusterClient for unit testing
//!
//! Stores objects in memory per namespace so CLI logic (pruning, orphan
//! cleanup, pre-apply checks) can be exercised without a cluster. A
//! namespace is only "present" once something was added to it; reads of
//! unknown namespaces return [`KubectlError::NotFound`] like the real
//! client does.

use crate::cluster_trait::ClusterClient;
use crate::error::KubectlError;
use crate::models::Deployment;
use crds::SleepInfo;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory ClusterClient for testing.
#[derive(Debug, Clone, Default)]
pub struct MockKubectlClient {
    sleep_infos: Arc<Mutex<HashMap<String, Vec<SleepInfo>>>>,
    deployments: Arc<Mutex<HashMap<String, Vec<Deployment>>>>,
    secrets: Arc<Mutex<HashMap<String, Vec<String>>>>,
    applied: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockKubectlClient {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a namespace visible without adding objects to it.
    pub fn add_namespace(&self, namespace: &str) {
        lock(&self.sleep_infos)
            .entry(namespace.to_string())
            .or_default();
        lock(&self.deployments)
            .entry(namespace.to_string())
            .or_default();
        lock(&self.secrets).entry(namespace.to_string()).or_default();
    }

    /// Add a SleepInfo to a namespace.
    pub fn add_sleep_info(&self, namespace: &str, sleep_info: SleepInfo) {
        self.add_namespace(namespace);
        lock(&self.sleep_infos)
            .entry(namespace.to_string())
            .or_default()
            .push(sleep_info);
    }

    /// Add a Deployment to a namespace.
    pub fn add_deployment(&self, namespace: &str, deployment: Deployment) {
        self.add_namespace(namespace);
        lock(&self.deployments)
            .entry(namespace.to_string())
            .or_default()
            .push(deployment);
    }

    /// Add a Secret name to a namespace.
    pub fn add_secret(&self, namespace: &str, name: &str) {
        self.add_namespace(namespace);
        lock(&self.secrets)
            .entry(namespace.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// Manifests passed to [`ClusterClient::apply_manifest`], in order.
    pub fn applied_manifests(&self) -> Vec<String> {
        lock(&self.applied).clone()
    }

    /// Names of the SleepInfos currently in a namespace.
    pub fn sleep_info_names(&self, namespace: &str) -> Vec<String> {
        lock(&self.sleep_infos)
            .get(namespace)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.metadata.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of the Secrets currently in a namespace.
    pub fn secret_names(&self, namespace: &str) -> Vec<String> {
        lock(&self.secrets).get(namespace).cloned().unwrap_or_default()
    }
}

impl ClusterClient for MockKubectlClient {
    fn get_sleep_infos(&self, namespace: &str) -> Result<Vec<SleepInfo>, KubectlError> {
        lock(&self.sleep_infos)
            .get(namespace)
            .cloned()
            .ok_or_else(|| KubectlError::NotFound(format!("namespaces \"{namespace}\" not found")))
    }

    fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, KubectlError> {
        lock(&self.deployments)
            .get(namespace)
            .cloned()
            .ok_or_else(|| KubectlError::NotFound(format!("namespaces \"{namespace}\" not found")))
    }

    fn list_secret_names(&self, namespace: &str) -> Result<Vec<String>, KubectlError> {
        lock(&self.secrets)
            .get(namespace)
            .cloned()
            .ok_or_else(|| KubectlError::NotFound(format!("namespaces \"{namespace}\" not found")))
    }

    fn apply_manifest(&self, manifest: &str) -> Result<String, KubectlError> {
        lock(&self.applied).push(manifest.to_string());
        Ok(String::new())
    }

    fn delete_sleep_info(&self, namespace: &str, name: &str) -> Result<(), KubectlError> {
        if let Some(items) = lock(&self.sleep_infos).get_mut(namespace) {
            items.retain(|i| i.metadata.name.as_deref() != Some(name));
        }
        Ok(())
    }

    fn delete_secret(&self, namespace: &str, name: &str) -> Result<(), KubectlError> {
        if let Some(items) = lock(&self.secrets).get_mut(namespace) {
            items.retain(|existing| existing != name);
        }
        Ok(())
    }
}

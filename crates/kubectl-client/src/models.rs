//! kubectl output models
//!
//! Thin projections of the JSON kubectl prints with `-o json`; only the
//! fields this tool reads are declared, everything else is ignored on
//! deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// List wrapper of `kubectl get <kind> -o json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectList<T> {
    /// The listed objects
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// The metadata slice this tool reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Object name
    #[serde(default)]
    pub name: String,

    /// Object labels
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

/// A Deployment, projected to the replica state checked before apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Name and labels
    #[serde(default)]
    pub metadata: Metadata,

    /// Desired replica count
    #[serde(default)]
    pub spec: DeploymentSpec,

    /// Observed replica state
    #[serde(default)]
    pub status: DeploymentStatus,
}

/// Deployment spec projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    /// Desired replicas; Kubernetes defaults a missing value to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

/// Deployment status projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStatus {
    /// Replicas currently ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_replicas: Option<i32>,
}

/// A Secret, projected to its name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Name and labels
    #[serde(default)]
    pub metadata: Metadata,
}

//! SleepInfo CRD
//!
//! The declarative schedule unit of the kube-green reconciler, extended
//! with the operator-managed resource-class booleans
//! (`suspendDeploymentsPgbouncer`, `suspendStatefulSetsPostgres`,
//! `suspendStatefulSetsHdfs`).

use crate::references::{ExcludeRef, Patch};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Annotation carrying the shared id of a correlated sleep/wake object set.
///
/// Wake-only objects locate the restore data saved by their sleep
/// counterpart through this id, so both sides must carry the same value.
pub const PAIR_ID_ANNOTATION: &str = "kube-green.stratio.com/pair-id";

/// Annotation naming an object's role within a correlated set.
pub const PAIR_ROLE_ANNOTATION: &str = "kube-green.stratio.com/pair-role";

/// `pair-role` value for the object that suspends and stores restore data.
pub const PAIR_ROLE_SLEEP: &str = "sleep";

/// `pair-role` value for objects that only restore.
pub const PAIR_ROLE_WAKE: &str = "wake";

/// Name of the Secret where the reconciler stores restore data for a
/// SleepInfo. Used to clean up Secrets whose SleepInfo is gone.
pub fn restore_secret_name(sleep_info_name: &str) -> String {
    format!("sleepinfo-{sleep_info_name}")
}

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "kube-green.com",
    version = "v1alpha1",
    kind = "SleepInfo",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct SleepInfoSpec {
    /// Weekdays the schedule fires on, as indices 0-6 (0 = Sunday),
    /// comma-separated or a range "a-b"
    pub weekdays: String,

    /// IANA time zone the times are expressed in (always "UTC" for
    /// generated objects)
    pub time_zone: String,

    /// Trigger time "HH:MM". For a wake-only object this carries the wake
    /// trigger time, by reconciler convention.
    pub sleep_at: String,

    /// Wake time "HH:MM"; omitted on sleep-only and wake-only objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_up_at: Option<String>,

    /// Suspend native Deployments
    #[serde(default)]
    pub suspend_deployments: bool,

    /// Suspend native StatefulSets
    #[serde(default)]
    pub suspend_stateful_sets: bool,

    /// Suspend CronJobs
    #[serde(default)]
    pub suspend_cron_jobs: bool,

    /// Manage PgBouncer custom resources (Deployment-backed) through their
    /// instance count
    #[serde(default, skip_serializing_if = "is_false")]
    pub suspend_deployments_pgbouncer: bool,

    /// Manage PgCluster custom resources through their shutdown annotation
    #[serde(default, skip_serializing_if = "is_false")]
    pub suspend_stateful_sets_postgres: bool,

    /// Manage HDFSCluster custom resources through their shutdown annotation
    #[serde(default, skip_serializing_if = "is_false")]
    pub suspend_stateful_sets_hdfs: bool,

    /// Resources the reconciler must not touch
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ref: Vec<ExcludeRef>,

    /// Extra patches for resource types without a native suspend boolean
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<Patch>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

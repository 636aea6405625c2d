//! Post-apply cluster hygiene
//!
//! The reconciler only manages what it is told about, so stale objects
//! must be pruned here: SleepInfos from earlier runs that the current
//! generation no longer produces, and the restore-data Secrets kube-green
//! leaves behind when a SleepInfo disappears. Also reports Deployments
//! that are already scaled to zero before apply — the reconciler only
//! restores what it suspended itself, so those stay down at wake time.

use crds::{restore_secret_name, SleepInfo};
use kubectl_client::{ClusterClient, KubectlError};
use schedule::NamespaceGroup;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Warn about Deployments that are scaled down before the schedule is
/// applied. Informational only: nothing is modified.
pub fn report_scaled_down_deployments(
    client: &dyn ClusterClient,
    tenant: &str,
    groups: &[NamespaceGroup],
) {
    let mut any_found = false;
    for &group in groups {
        let namespace = group.namespace(tenant);
        let Ok(deployments) = client.list_deployments(&namespace) else {
            continue;
        };
        for deployment in deployments {
            let desired = deployment.spec.replicas.unwrap_or(1);
            let ready = deployment.status.ready_replicas.unwrap_or(0);
            if desired != 0 && ready != 0 {
                continue;
            }

            let labels = &deployment.metadata.labels;
            // Virtualizer and operator-managed resources are excluded from
            // the schedule anyway
            let app_id = labels
                .get("cct.stratio.com/application_id")
                .map(String::as_str)
                .unwrap_or_default();
            if app_id.to_lowercase().contains("virtualizer") {
                continue;
            }
            let managed_by = labels
                .get("app.kubernetes.io/managed-by")
                .map(String::as_str)
                .unwrap_or_default();
            if managed_by.contains("postgres-operator") || managed_by.contains("hdfs-operator") {
                continue;
            }

            any_found = true;
            warn!(
                "Deployment '{}' in namespace '{}' is scaled down (replicas=0); without restore data it stays down at wake time",
                deployment.metadata.name, namespace
            );
        }
    }
    if any_found {
        warn!(
            "Scaled-down deployments stay down when wake time arrives: the reconciler only restores resources it suspended itself"
        );
    }
}

/// Delete SleepInfos the current generation no longer produces, together
/// with their restore-data Secrets.
pub fn prune_undesired(
    client: &dyn ClusterClient,
    tenant: &str,
    groups: &[NamespaceGroup],
    desired: &[SleepInfo],
) -> Result<(), KubectlError> {
    let keep: BTreeSet<&str> = desired
        .iter()
        .filter_map(|o| o.metadata.name.as_deref())
        .collect();

    for &group in groups {
        let namespace = group.namespace(tenant);
        let existing = match client.get_sleep_infos(&namespace) {
            Ok(items) => items,
            Err(KubectlError::NotFound(_)) => continue,
            Err(error) => return Err(error),
        };
        for sleep_info in existing {
            let Some(name) = sleep_info.metadata.name.as_deref() else {
                continue;
            };
            if keep.contains(name) {
                continue;
            }
            info!("Removing unwanted SleepInfo {name} ({namespace})");
            client.delete_sleep_info(&namespace, name)?;
            let secret = restore_secret_name(name);
            info!("Removing its restore Secret {secret} ({namespace})");
            client.delete_secret(&namespace, &secret)?;
        }
    }
    Ok(())
}

/// Delete `sleepinfo-*` Secrets whose SleepInfo no longer exists.
pub fn cleanup_orphan_secrets(
    client: &dyn ClusterClient,
    tenant: &str,
    groups: &[NamespaceGroup],
) -> Result<(), KubectlError> {
    let mut cleaned = 0usize;
    for &group in groups {
        let namespace = group.namespace(tenant);
        let secrets = match client.list_secret_names(&namespace) {
            Ok(names) => names,
            Err(KubectlError::NotFound(_)) => continue,
            Err(error) => return Err(error),
        };
        let owners: BTreeSet<String> = match client.get_sleep_infos(&namespace) {
            Ok(items) => items
                .into_iter()
                .filter_map(|i| i.metadata.name)
                .collect(),
            Err(KubectlError::NotFound(_)) => BTreeSet::new(),
            Err(error) => return Err(error),
        };

        for secret in secrets {
            let Some(owner) = secret.strip_prefix("sleepinfo-") else {
                continue;
            };
            if owners.contains(owner) {
                continue;
            }
            info!("Removing orphan restore Secret {secret} ({namespace}): SleepInfo '{owner}' no longer exists");
            client.delete_secret(&namespace, &secret)?;
            cleaned += 1;
        }
    }
    if cleaned > 0 {
        info!("Removed {cleaned} orphan restore Secret(s)");
    }
    Ok(())
}

//! Schedule assembly
//!
//! The central algorithm: normalizes weekday specs, converts the off/on
//! times to UTC with their independent day shifts, realigns the weekday
//! sets, computes the staggered wake chain and decides the object layout
//! for each selected namespace group.

use crate::error::ScheduleError;
use crate::policy::{NamespaceGroup, SchedulePolicy};
use crate::timeconv::{TimeConverter, TimeOfDay};
use crate::weekdays::WeekdaySpec;
use chrono::NaiveDate;
use crds::ExcludeRef;
use tracing::{debug, warn};

/// Subrole suffix of the first datastores wake phase (Postgres + HDFS).
pub const SUBROLE_PG_HDFS: &str = "pg-hdfs";

/// Subrole suffix of the second datastores wake phase (PgBouncer).
pub const SUBROLE_PGBOUNCER: &str = "pgbouncer";

/// What a tenant asked for, in local time.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Tenant identifier; namespaces are `{tenant}-{group}`
    pub tenant: String,
    /// Local power-off time
    pub off_local: TimeOfDay,
    /// Local power-on time
    pub on_local: TimeOfDay,
    /// Shared weekday expression; empty or None means every day
    pub weekdays: Option<String>,
    /// Weekdays for the off transition, defaulting to `weekdays`
    pub sleepdays: Option<String>,
    /// Weekdays for the on transition, defaulting to `weekdays`
    pub wakedays: Option<String>,
    /// Namespace groups to generate for; empty means all
    pub groups: Vec<NamespaceGroup>,
}

/// Which resource classes a schedule object drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceToggles {
    /// Native Deployments
    pub deployments: bool,
    /// Native StatefulSets
    pub stateful_sets: bool,
    /// CronJobs
    pub cron_jobs: bool,
    /// PgBouncer custom resources (Deployment-backed)
    pub pgbouncer_deployments: bool,
    /// PgCluster custom resources (StatefulSet-backed)
    pub postgres_stateful_sets: bool,
    /// HDFSCluster custom resources (StatefulSet-backed)
    pub hdfs_stateful_sets: bool,
}

impl ResourceToggles {
    /// Deployments and CronJobs, the baseline for application namespaces.
    pub fn native_workloads() -> Self {
        Self {
            deployments: true,
            cron_jobs: true,
            ..Self::default()
        }
    }

    /// Every class at once, used by the datastores sleep object.
    pub fn everything() -> Self {
        Self {
            deployments: true,
            stateful_sets: true,
            cron_jobs: true,
            pgbouncer_deployments: true,
            postgres_stateful_sets: true,
            hdfs_stateful_sets: true,
        }
    }
}

/// One step of the wake chain: a UTC time, the resource classes restored
/// at that time, and the name subrole distinguishing it from its siblings.
#[derive(Debug, Clone)]
pub struct WakePhase {
    /// UTC wake time
    pub at: TimeOfDay,
    /// Name suffix when a group wakes in several phases
    pub subrole: Option<&'static str>,
    /// Resource classes restored in this phase
    pub suspend: ResourceToggles,
}

/// The computed schedule for one namespace group, ready for rendering.
#[derive(Debug, Clone)]
pub struct ScheduleIntent {
    /// The group this intent covers
    pub group: NamespaceGroup,
    /// Owning tenant
    pub tenant: String,
    /// Target namespace, `{tenant}-{group}`
    pub namespace: String,
    /// UTC power-off time
    pub off_at: TimeOfDay,
    /// Weekdays of the off transition, already shifted to UTC
    pub sleep_days: WeekdaySpec,
    /// Weekdays of the on transition, already shifted to UTC
    pub wake_days: WeekdaySpec,
    /// Whether one object can carry both transitions (equal weekday sets
    /// and a single wake phase)
    pub combined: bool,
    /// The wake chain; one phase for simple groups, three for datastores
    pub wake_phases: Vec<WakePhase>,
    /// Resource classes suspended at off time
    pub sleep_suspend: ResourceToggles,
    /// Resources the reconciler must leave alone
    pub exclusions: Vec<ExcludeRef>,
}

/// Builds [`ScheduleIntent`]s from a [`ScheduleRequest`] under a
/// [`SchedulePolicy`].
#[derive(Debug, Clone)]
pub struct ScheduleAssembler {
    policy: SchedulePolicy,
}

impl ScheduleAssembler {
    /// Create an assembler with the given policy.
    pub fn new(policy: SchedulePolicy) -> Self {
        Self { policy }
    }

    /// The policy this assembler works under.
    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }

    /// Compute the per-group schedule intents.
    ///
    /// `reference` anchors the time-zone conversion (normally today in the
    /// policy's local zone); the UTC offset in effect on that date is the
    /// one used.
    ///
    /// # Errors
    ///
    /// Any malformed weekday expression or unknown zone aborts the whole
    /// run before an intent is produced.
    pub fn assemble(
        &self,
        request: &ScheduleRequest,
        reference: NaiveDate,
    ) -> Result<Vec<ScheduleIntent>, ScheduleError> {
        // 1. Normalize the weekday expressions, still in local time.
        let shared = WeekdaySpec::parse(request.weekdays.as_deref().unwrap_or(""))?;
        let sleep_local = match request.sleepdays.as_deref() {
            Some(spec) => WeekdaySpec::parse(spec)?,
            None => shared.clone(),
        };
        let wake_local = match request.wakedays.as_deref() {
            Some(spec) => WeekdaySpec::parse(spec)?,
            None => shared,
        };

        // 2. Convert both transition times to UTC. The day shifts are
        // independent: the transitions happen at different local clock
        // times and may land on different sides of midnight UTC.
        let converter = TimeConverter::new(&self.policy.local_zone, reference)?;
        let (off_utc, off_shift) = converter.local_to_utc(request.off_local)?;
        let (on_utc, on_shift) = converter.local_to_utc(request.on_local)?;
        debug!(
            "Converted off {} -> {} UTC (shift {:+}), on {} -> {} UTC (shift {:+})",
            request.off_local, off_utc, off_shift, request.on_local, on_utc, on_shift
        );

        // 3. Realign each weekday set with its own shift.
        let sleep_days = sleep_local.shift(off_shift);
        let wake_days = wake_local.shift(on_shift);

        // 4. Staggered wake chain: storage first, pooling next, workloads
        // last.
        let (on_pooling, pooling_carry) =
            on_utc.add_minutes(self.policy.stagger.pooling_minutes);
        let (on_workloads, workload_carry) =
            on_utc.add_minutes(self.policy.stagger.workload_minutes);
        if pooling_carry != 0 || workload_carry != 0 {
            warn!(
                "Wake stagger crosses midnight UTC (base {}); staggered phases run a day later than the base wake weekdays",
                on_utc
            );
        }

        // 5. One intent per selected group.
        let groups: &[NamespaceGroup] = if request.groups.is_empty() {
            &NamespaceGroup::ALL
        } else {
            &request.groups
        };
        let mut intents = Vec::with_capacity(groups.len());
        for &group in groups {
            intents.push(self.intent_for_group(
                group,
                request,
                off_utc,
                on_utc,
                on_pooling,
                on_workloads,
                &sleep_days,
                &wake_days,
            ));
        }
        Ok(intents)
    }

    #[allow(clippy::too_many_arguments, reason = "private fan-out of assemble()")]
    fn intent_for_group(
        &self,
        group: NamespaceGroup,
        request: &ScheduleRequest,
        off_utc: TimeOfDay,
        on_utc: TimeOfDay,
        on_pooling: TimeOfDay,
        on_workloads: TimeOfDay,
        sleep_days: &WeekdaySpec,
        wake_days: &WeekdaySpec,
    ) -> ScheduleIntent {
        let namespace = group.namespace(&request.tenant);
        let equal_days = sleep_days == wake_days;

        let (sleep_suspend, wake_phases, exclusions, combined) = match group {
            // The dependency chain: always paired, three wake phases with
            // distinct times, correlated with the sleep object so every
            // phase can reach the stored restore data.
            NamespaceGroup::Datastores => (
                ResourceToggles::everything(),
                vec![
                    WakePhase {
                        at: on_utc,
                        subrole: Some(SUBROLE_PG_HDFS),
                        suspend: ResourceToggles {
                            postgres_stateful_sets: true,
                            hdfs_stateful_sets: true,
                            ..ResourceToggles::default()
                        },
                    },
                    WakePhase {
                        at: on_pooling,
                        subrole: Some(SUBROLE_PGBOUNCER),
                        suspend: ResourceToggles {
                            pgbouncer_deployments: true,
                            ..ResourceToggles::default()
                        },
                    },
                    WakePhase {
                        at: on_workloads,
                        subrole: None,
                        // PgBouncer stays on so the reconciler also
                        // restores it when replaying restore data
                        suspend: ResourceToggles {
                            deployments: true,
                            stateful_sets: true,
                            cron_jobs: true,
                            pgbouncer_deployments: true,
                            ..ResourceToggles::default()
                        },
                    },
                ],
                self.policy.operator_exclusions.clone(),
                false,
            ),
            NamespaceGroup::Apps => {
                let suspend = ResourceToggles::native_workloads();
                (
                    suspend,
                    vec![WakePhase {
                        at: on_workloads,
                        subrole: None,
                        suspend,
                    }],
                    vec![ExcludeRef::by_label(
                        &self.policy.virtualizer_label,
                        &format!("virtualizer.{namespace}"),
                    )],
                    equal_days,
                )
            }
            NamespaceGroup::Rocket | NamespaceGroup::Intelligence => {
                let suspend = ResourceToggles::native_workloads();
                (
                    suspend,
                    vec![WakePhase {
                        at: on_workloads,
                        subrole: None,
                        suspend,
                    }],
                    Vec::new(),
                    equal_days,
                )
            }
            NamespaceGroup::Airflowsso => {
                let suspend = ResourceToggles {
                    deployments: true,
                    stateful_sets: true,
                    cron_jobs: true,
                    postgres_stateful_sets: true,
                    ..ResourceToggles::default()
                };
                (
                    suspend,
                    vec![WakePhase {
                        at: on_workloads,
                        subrole: None,
                        suspend,
                    }],
                    self.policy.operator_exclusions.clone(),
                    equal_days,
                )
            }
        };

        ScheduleIntent {
            group,
            tenant: request.tenant.clone(),
            namespace,
            off_at: off_utc,
            sleep_days: sleep_days.clone(),
            wake_days: wake_days.clone(),
            combined,
            wake_phases,
            sleep_suspend,
            exclusions,
        }
    }
}

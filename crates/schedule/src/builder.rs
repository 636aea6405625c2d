//! SleepInfo rendering
//!
//! Pure translation of [`ScheduleIntent`]s into `SleepInfo` objects:
//! deterministic names, the pair-id/pair-role correlation annotations, and
//! the `SleepInfoSpec` field mapping. All naming and annotation
//! conventions of the external reconciler live here, so the assembler
//! never touches them.

use crate::assembler::{ResourceToggles, ScheduleIntent, WakePhase};
use crate::timeconv::TimeOfDay;
use crate::weekdays::WeekdaySpec;
use crds::{
    ExcludeRef, SleepInfo, SleepInfoSpec, PAIR_ID_ANNOTATION, PAIR_ROLE_ANNOTATION,
    PAIR_ROLE_SLEEP, PAIR_ROLE_WAKE,
};
use std::collections::BTreeMap;

/// Zone name carried by every emitted object; times are converted before
/// rendering.
const EMITTED_TIME_ZONE: &str = "UTC";

/// Render every intent into its SleepInfo objects.
///
/// A combined intent yields one object carrying both transitions. A paired
/// intent yields a sleep-only object plus one wake-only object per wake
/// phase, all correlated through the same pair id; wake-only objects carry
/// their trigger time in `sleepAt` and omit `wakeUpAt`, by reconciler
/// convention.
pub fn render(intents: &[ScheduleIntent]) -> Vec<SleepInfo> {
    let mut objects = Vec::new();
    for intent in intents {
        if intent.combined && intent.wake_phases.len() == 1 {
            objects.push(render_combined(intent, &intent.wake_phases[0]));
        } else {
            objects.push(render_sleep(intent));
            for phase in &intent.wake_phases {
                objects.push(render_wake(intent, phase));
            }
        }
    }
    objects
}

fn render_combined(intent: &ScheduleIntent, phase: &WakePhase) -> SleepInfo {
    let name = format!("{}-{}", intent.tenant, intent.group);
    let spec = base_spec(
        &intent.sleep_days,
        intent.off_at,
        Some(phase.at),
        intent.sleep_suspend,
        &intent.exclusions,
    );
    object(&name, &intent.namespace, None, spec)
}

fn render_sleep(intent: &ScheduleIntent) -> SleepInfo {
    let name = format!("sleep-{}-{}", intent.tenant, intent.group);
    let spec = base_spec(
        &intent.sleep_days,
        intent.off_at,
        None,
        intent.sleep_suspend,
        &intent.exclusions,
    );
    object(
        &name,
        &intent.namespace,
        Some(pair_annotations(intent, PAIR_ROLE_SLEEP)),
        spec,
    )
}

fn render_wake(intent: &ScheduleIntent, phase: &WakePhase) -> SleepInfo {
    let name = match phase.subrole {
        Some(subrole) => format!("wake-{}-{}-{}", intent.tenant, intent.group, subrole),
        None => format!("wake-{}-{}", intent.tenant, intent.group),
    };
    let spec = base_spec(
        &intent.wake_days,
        phase.at,
        None,
        phase.suspend,
        &intent.exclusions,
    );
    object(
        &name,
        &intent.namespace,
        Some(pair_annotations(intent, PAIR_ROLE_WAKE)),
        spec,
    )
}

fn pair_annotations(intent: &ScheduleIntent, role: &str) -> BTreeMap<String, String> {
    let mut annotations = BTreeMap::new();
    annotations.insert(
        PAIR_ID_ANNOTATION.to_string(),
        format!("{}-{}", intent.tenant, intent.group),
    );
    annotations.insert(PAIR_ROLE_ANNOTATION.to_string(), role.to_string());
    annotations
}

fn base_spec(
    weekdays: &WeekdaySpec,
    sleep_at: TimeOfDay,
    wake_up_at: Option<TimeOfDay>,
    suspend: ResourceToggles,
    exclusions: &[ExcludeRef],
) -> SleepInfoSpec {
    SleepInfoSpec {
        weekdays: weekdays_field(weekdays),
        time_zone: EMITTED_TIME_ZONE.to_string(),
        sleep_at: sleep_at.to_string(),
        wake_up_at: wake_up_at.map(|t| t.to_string()),
        suspend_deployments: suspend.deployments,
        suspend_stateful_sets: suspend.stateful_sets,
        suspend_cron_jobs: suspend.cron_jobs,
        suspend_deployments_pgbouncer: suspend.pgbouncer_deployments,
        suspend_stateful_sets_postgres: suspend.postgres_stateful_sets,
        suspend_stateful_sets_hdfs: suspend.hdfs_stateful_sets,
        exclude_ref: exclusions.to_vec(),
        patches: Vec::new(),
    }
}

/// Render the weekday set and re-validate the result parses back to the
/// same membership. A no-op for canonical input; catches a formatting
/// regression before it reaches the cluster.
fn weekdays_field(weekdays: &WeekdaySpec) -> String {
    let rendered = weekdays.to_kube();
    debug_assert!(
        WeekdaySpec::parse(&rendered)
            .map(|reparsed| reparsed == *weekdays)
            .unwrap_or(false),
        "weekday rendering must round-trip: {rendered}"
    );
    rendered
}

fn object(
    name: &str,
    namespace: &str,
    annotations: Option<BTreeMap<String, String>>,
    spec: SleepInfoSpec,
) -> SleepInfo {
    let mut sleep_info = SleepInfo::new(name, spec);
    sleep_info.metadata.namespace = Some(namespace.to_string());
    sleep_info.metadata.annotations = annotations;
    sleep_info
}

//! Show command: report the schedules currently applied.

use anyhow::Result;
use clap::Args;
use kubectl_client::{ClusterClient, KubectlClient, KubectlError};
use schedule::{NamespaceGroup, SchedulePolicy, TimeConverter, TimeOfDay, WeekdaySpec};

/// Arguments of `show`.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Tenant name to inspect
    #[arg(long)]
    tenant: String,

    /// Restrict to namespace groups (comma list); default all
    #[arg(long)]
    namespaces: Option<String>,
}

impl ShowCommand {
    /// Print every SleepInfo of the tenant's namespaces in readable form.
    pub fn run(&self) -> Result<()> {
        let policy = SchedulePolicy::default();
        let converter = TimeConverter::for_current_date(&policy.local_zone)?;
        let client = KubectlClient::new();

        let mut found_any = false;
        for group in NamespaceGroup::parse_filter(self.namespaces.as_deref()) {
            let namespace = group.namespace(&self.tenant);
            let sleep_infos = match client.get_sleep_infos(&namespace) {
                Ok(items) => items,
                // Missing namespace or CRD: nothing scheduled there
                Err(KubectlError::NotFound(_)) => continue,
                Err(error) => return Err(error.into()),
            };
            if sleep_infos.is_empty() {
                continue;
            }

            found_any = true;
            println!("\n# Namespace: {namespace}");
            for info in &sleep_infos {
                let name = info.metadata.name.as_deref().unwrap_or("<unnamed>");
                println!(
                    "- {name}: weekdays={} ({})  sleepAt UTC={} ({})  wakeUpAt UTC={} ({})",
                    info.spec.weekdays,
                    human_weekdays(&info.spec.weekdays),
                    info.spec.sleep_at,
                    local_display(&converter, &info.spec.sleep_at),
                    info.spec.wake_up_at.as_deref().unwrap_or("-"),
                    info.spec
                        .wake_up_at
                        .as_deref()
                        .map_or_else(|| "-".to_string(), |t| local_display(&converter, t)),
                );
            }
        }

        if !found_any {
            println!("(No SleepInfo found for tenant)");
        }
        Ok(())
    }
}

/// Humanize a weekday string fetched from the cluster; foreign or
/// malformed values are shown as-is rather than failing the report.
fn human_weekdays(weekdays: &str) -> String {
    WeekdaySpec::parse(weekdays).map_or_else(|_| weekdays.to_string(), |spec| spec.to_human())
}

/// Display-convert an "HH:MM" UTC string to the local zone.
fn local_display(converter: &TimeConverter, time: &str) -> String {
    time.parse::<TimeOfDay>()
        .map_or_else(|_| time.to_string(), |t| converter.utc_to_local(t).to_string())
}

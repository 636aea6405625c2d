//! Create/update command: generate, render and optionally apply.

use crate::output;
use crate::reconcile;
use anyhow::{Context, Result};
use clap::Args;
use kubectl_client::{ClusterClient, KubectlClient};
use schedule::{
    NamespaceGroup, ScheduleAssembler, SchedulePolicy, ScheduleRequest, TimeConverter, TimeOfDay,
};
use std::path::PathBuf;
use tracing::info;

/// Arguments shared by `create` and `update`.
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Tenant name; namespaces are {tenant}-{group}
    #[arg(long)]
    tenant: String,

    /// Local power-off time, HH:MM
    #[arg(long)]
    off: String,

    /// Local power-on time, HH:MM
    #[arg(long)]
    on: String,

    /// Weekdays, Spanish names ("lunes-viernes") or numeric ("1-5");
    /// default every day
    #[arg(long, default_value = "0-6")]
    weekdays: String,

    /// Weekdays for the off transition only; defaults to --weekdays
    #[arg(long)]
    sleepdays: Option<String>,

    /// Weekdays for the on transition only; defaults to --weekdays
    #[arg(long)]
    wakedays: Option<String>,

    /// Restrict to namespace groups (comma list: datastores, apps,
    /// rocket, intelligence, airflowsso); default all
    #[arg(long)]
    namespaces: Option<String>,

    /// Write the YAML to {outdir}/{tenant}.sleepinfos.yaml instead of
    /// stdout
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Apply to the cluster after rendering
    #[arg(long)]
    apply: bool,
}

impl CreateCommand {
    /// Generate the schedule, write it out and apply it when requested.
    pub fn run(&self) -> Result<()> {
        let off_local: TimeOfDay = self
            .off
            .parse()
            .with_context(|| format!("--off '{}'", self.off))?;
        let on_local: TimeOfDay = self
            .on
            .parse()
            .with_context(|| format!("--on '{}'", self.on))?;
        let groups = NamespaceGroup::parse_filter(self.namespaces.as_deref());

        let assembler = ScheduleAssembler::new(SchedulePolicy::default());
        // Conversions are anchored to today's date in the local zone; the
        // UTC offset is the one in effect now, so regenerate after a
        // clock change.
        let reference = TimeConverter::for_current_date(&assembler.policy().local_zone)?
            .reference();

        let request = ScheduleRequest {
            tenant: self.tenant.clone(),
            off_local,
            on_local,
            weekdays: Some(self.weekdays.clone()),
            sleepdays: self.sleepdays.clone(),
            wakedays: self.wakedays.clone(),
            groups: groups.clone(),
        };
        let intents = assembler.assemble(&request, reference)?;
        let objects = schedule::render(&intents);
        let manifest = output::to_yaml_documents(&objects)?;

        output::write_or_print(&manifest, self.outdir.as_deref(), &self.tenant)?;

        if self.apply {
            let client = KubectlClient::new();
            reconcile::report_scaled_down_deployments(&client, &self.tenant, &groups);

            info!("Applying {} SleepInfos for tenant {}", objects.len(), self.tenant);
            let applied = client.apply_manifest(&manifest)?;
            print!("{applied}");

            reconcile::prune_undesired(&client, &self.tenant, &groups, &objects)?;
            reconcile::cleanup_orphan_secrets(&client, &self.tenant, &groups)?;
        }

        Ok(())
    }
}

//! Schedule policy
//!
//! The fixed facts of the platform — which namespace groups exist, how
//! wake-up is staggered, which operator-managed resources are off limits —
//! gathered into one value handed to the assembler at construction, so
//! tests can substitute alternate policies.

use crds::ExcludeRef;
use std::fmt;
use tracing::warn;

/// The namespace groups a tenant is split into. Each maps to exactly one
/// namespace, `{tenant}-{group}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceGroup {
    /// Storage tier: Postgres, HDFS, PgBouncer
    Datastores,
    /// Main application workloads
    Apps,
    /// Rocket services
    Rocket,
    /// Intelligence services
    Intelligence,
    /// Airflow SSO services
    Airflowsso,
}

impl NamespaceGroup {
    /// Every group, in wake-up documentation order.
    pub const ALL: [Self; 5] = [
        Self::Datastores,
        Self::Apps,
        Self::Rocket,
        Self::Intelligence,
        Self::Airflowsso,
    ];

    /// The namespace suffix for this group.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Datastores => "datastores",
            Self::Apps => "apps",
            Self::Rocket => "rocket",
            Self::Intelligence => "intelligence",
            Self::Airflowsso => "airflowsso",
        }
    }

    /// The namespace this group lives in for `tenant`.
    pub fn namespace(self, tenant: &str) -> String {
        format!("{tenant}-{}", self.suffix())
    }

    /// Look a group up by its namespace suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.suffix() == suffix)
    }

    /// Parse a comma/whitespace-separated group filter.
    ///
    /// Unknown tokens are dropped with a warning rather than failing the
    /// run; an empty result (no filter given, or nothing valid left) means
    /// all groups.
    pub fn parse_filter(input: Option<&str>) -> Vec<Self> {
        let Some(raw) = input else {
            return Self::ALL.to_vec();
        };
        let mut selected = Vec::new();
        for token in raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            match Self::from_suffix(&token.to_lowercase()) {
                Some(group) => {
                    if !selected.contains(&group) {
                        selected.push(group);
                    }
                }
                None => warn!(
                    "Unknown namespace group '{}' ignored. Valid: {}",
                    token,
                    Self::ALL.map(Self::suffix).join(", ")
                ),
            }
        }
        if selected.is_empty() {
            Self::ALL.to_vec()
        } else {
            selected
        }
    }
}

impl fmt::Display for NamespaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Fixed stagger offsets for the dependency-ordered wake chain, in minutes
/// after the base wake time. Chosen comfortably above observed startup
/// latency, not derived dynamically.
#[derive(Debug, Clone)]
pub struct StaggerOffsets {
    /// Connection-pooling tier (PgBouncer), after Postgres/HDFS are up
    pub pooling_minutes: u32,
    /// Native application workloads, after the pooling tier
    pub workload_minutes: u32,
}

impl Default for StaggerOffsets {
    fn default() -> Self {
        Self {
            pooling_minutes: 5,
            workload_minutes: 7,
        }
    }
}

/// The policy the assembler works under.
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    /// IANA zone user-facing times are expressed in
    pub local_zone: String,
    /// Wake-chain stagger offsets
    pub stagger: StaggerOffsets,
    /// Label matchers for operator-managed resources that must never be
    /// suspended natively (they are driven through the dedicated suspend
    /// booleans instead)
    pub operator_exclusions: Vec<ExcludeRef>,
    /// Label key identifying the virtualizer application in the apps
    /// namespace
    pub virtualizer_label: String,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            local_zone: "America/Bogota".to_string(),
            stagger: StaggerOffsets::default(),
            operator_exclusions: default_operator_exclusions(),
            virtualizer_label: "cct.stratio.com/application_id".to_string(),
        }
    }
}

/// Resources owned by the postgres/hdfs operators. The labels match every
/// instance the operators create, so new clusters are excluded without
/// listing names.
fn default_operator_exclusions() -> Vec<ExcludeRef> {
    vec![
        ExcludeRef::by_label("app.kubernetes.io/managed-by", "postgres-operator"),
        ExcludeRef::by_label("postgres.stratio.com/cluster", "true"),
        ExcludeRef::by_label("app.kubernetes.io/part-of", "postgres"),
        ExcludeRef::by_label("app.kubernetes.io/managed-by", "hdfs-operator"),
        ExcludeRef::by_label("hdfs.stratio.com/cluster", "true"),
        ExcludeRef::by_label("app.kubernetes.io/part-of", "hdfs"),
    ]
}

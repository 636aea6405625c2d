//! Exclusion references and patch payloads for SleepInfo
//!
//! `excludeRef` entries tell the reconciler which resources in the
//! namespace it must leave alone; `patches` carry specialized handling for
//! resource types the native suspend booleans do not cover.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resource-exclusion predicate.
///
/// Either names a single resource (`apiVersion` + `kind` + `name`) or
/// selects a set by labels via `matchLabels`. The reconciler skips any
/// workload matched by at least one entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExcludeRef {
    /// API version of the excluded resource (e.g. "apps/v1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind of the excluded resource (e.g. "Deployment")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the excluded resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Label selector; a resource carrying all listed labels is excluded
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
}

impl ExcludeRef {
    /// Exclusion by a single label key/value pair.
    pub fn by_label(key: &str, value: &str) -> Self {
        let mut match_labels = BTreeMap::new();
        match_labels.insert(key.to_string(), value.to_string());
        Self {
            api_version: None,
            kind: None,
            name: None,
            match_labels,
        }
    }
}

/// Target of a [`Patch`]: a resource group/kind pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchTarget {
    /// API group of the patched resource (empty for the core group)
    pub group: String,

    /// Kind of the patched resource
    pub kind: String,
}

/// A strategic-merge patch applied by the reconciler to every resource of
/// the target kind in the namespace.
///
/// The `patch` text is YAML; multi-line payloads render as literal block
/// scalars when the object is serialized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// Which resources the patch applies to
    pub target: PatchTarget,

    /// The patch body, as YAML text
    pub patch: String,
}

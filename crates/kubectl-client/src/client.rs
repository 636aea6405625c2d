//! kubectl subprocess invocation
//!
//! One blocking child process per operation, stdout/stderr captured. A
//! non-zero exit maps to [`KubectlError::NotFound`] when kubectl reports a
//! missing namespace or resource type, and to
//! [`KubectlError::CommandFailed`] with the verbatim stderr otherwise.

use crate::cluster_trait::ClusterClient;
use crate::error::KubectlError;
use crate::models::{Deployment, ObjectList, Secret};
use crds::SleepInfo;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Client invoking the external `kubectl` binary.
#[derive(Debug, Clone)]
pub struct KubectlClient {
    program: String,
}

impl Default for KubectlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KubectlClient {
    /// Client for the `kubectl` found on PATH.
    pub fn new() -> Self {
        Self {
            program: "kubectl".to_string(),
        }
    }

    /// Client for an explicit binary path (e.g. a vendored kubectl).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<String, KubectlError> {
        debug!("Running {} {}", self.program, args.join(" "));
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn()?;
        if let Some(input) = stdin {
            if let Some(mut handle) = child.stdin.take() {
                handle.write_all(input.as_bytes())?;
            }
        }
        let output = child.wait_with_output()?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains("NotFound")
            || stderr.contains("doesn't have a resource type")
            || stderr.contains("the server could not find the requested resource")
        {
            Err(KubectlError::NotFound(stderr))
        } else {
            Err(KubectlError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr,
            })
        }
    }
}

impl ClusterClient for KubectlClient {
    fn get_sleep_infos(&self, namespace: &str) -> Result<Vec<SleepInfo>, KubectlError> {
        let stdout = self.run(&["-n", namespace, "get", "sleepinfo", "-o", "json"], None)?;
        let list: ObjectList<SleepInfo> = serde_json::from_str(&stdout)?;
        Ok(list.items)
    }

    fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>, KubectlError> {
        let stdout = self.run(&["-n", namespace, "get", "deployments", "-o", "json"], None)?;
        let list: ObjectList<Deployment> = serde_json::from_str(&stdout)?;
        Ok(list.items)
    }

    fn list_secret_names(&self, namespace: &str) -> Result<Vec<String>, KubectlError> {
        let stdout = self.run(&["-n", namespace, "get", "secrets", "-o", "json"], None)?;
        let list: ObjectList<Secret> = serde_json::from_str(&stdout)?;
        Ok(list.items.into_iter().map(|s| s.metadata.name).collect())
    }

    fn apply_manifest(&self, manifest: &str) -> Result<String, KubectlError> {
        self.run(&["apply", "-f", "-"], Some(manifest))
    }

    fn delete_sleep_info(&self, namespace: &str, name: &str) -> Result<(), KubectlError> {
        self.run(
            &["-n", namespace, "delete", "sleepinfo", name, "--ignore-not-found"],
            None,
        )
        .map(|_| ())
    }

    fn delete_secret(&self, namespace: &str, name: &str) -> Result<(), KubectlError> {
        self.run(
            &["-n", namespace, "delete", "secret", name, "--ignore-not-found"],
            None,
        )
        .map(|_| ())
    }
}

//! Manifest output: multi-document YAML to stdout or a file.

use anyhow::{Context, Result};
use crds::SleepInfo;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize objects as a multi-document YAML stream.
pub fn to_yaml_documents(objects: &[SleepInfo]) -> Result<String> {
    let mut documents = Vec::with_capacity(objects.len());
    for object in objects {
        documents.push(serde_yaml::to_string(object)?);
    }
    Ok(documents.join("---\n"))
}

/// Write the manifest to `{outdir}/{tenant}.sleepinfos.yaml`, or print it
/// to stdout when no directory was given.
pub fn write_or_print(manifest: &str, outdir: Option<&Path>, tenant: &str) -> Result<()> {
    match outdir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let path = dir.join(format!("{tenant}.sleepinfos.yaml"));
            fs::write(&path, manifest)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Rendered: {}", path.display());
            println!("[OK] Rendered: {}", path.display());
        }
        None => print!("{manifest}"),
    }
    Ok(())
}

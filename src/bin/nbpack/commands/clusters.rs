//! `nbpack clusters` command

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::cli::ClustersArgs;
use nbpack::core::artifact::{Artifact, ArtifactKind};
use nbpack::ops::plan_clusters;
use nbpack::util::Config;

pub fn execute(args: ClustersArgs, config: &Config) -> Result<()> {
    let mut modules = Vec::new();
    for entry in WalkDir::new(&args.dir) {
        let entry = entry
            .with_context(|| format!("failed to scan {}", args.dir.display()))?;
        if !entry.file_type().is_file() || entry.file_name() != "info.xml" {
            continue;
        }
        let descriptor = std::fs::read_to_string(entry.path())
            .with_context(|| format!("failed to read descriptor: {}", entry.path().display()))?;

        // NBM layout puts the descriptor at <module>/Info/info.xml
        let name = entry
            .path()
            .ancestors()
            .nth(2)
            .and_then(|dir| dir.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.path().display().to_string());
        modules.push((Artifact::new("local", name, "0", ArtifactKind::Nbm), descriptor));
    }

    if modules.is_empty() {
        println!("no packaging descriptors under {}", args.dir.display());
        return Ok(());
    }

    let plan = plan_clusters(&modules, config.cluster.default_cluster.as_deref());
    for (cluster, members) in plan.iter() {
        println!("{cluster}:");
        for module in members {
            println!("  {}", module.artifact());
        }
    }
    println!("enabled clusters: {}", plan.enabled_clusters().join(","));
    Ok(())
}

//! `nbpack modules` command

use anyhow::{Context, Result};

use crate::cli::ModulesArgs;
use crate::commands::tree_input::load_tree;
use nbpack::manifest::FsManifestSource;
use nbpack::ops::{get_library_artifacts, get_module_dependency_artifacts};
use nbpack::util::Config;

pub fn execute(args: ModulesArgs, config: &Config) -> Result<()> {
    let mut input = load_tree(&args.tree)?;
    let use_osgi = args.osgi || config.modules.use_osgi_dependencies;

    let declared = config
        .modules
        .dependencies
        .iter()
        .map(|entry| entry.to_dependency())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid module dependency in configuration")?;

    let source = FsManifestSource;
    let libraries = get_library_artifacts(
        &input.root,
        &config.modules.libraries,
        &input.runtime,
        &mut input.cache,
        &source,
        use_osgi,
    )?;

    let direct: Vec<_> = input
        .root
        .children()
        .iter()
        .map(|child| (child.artifact().clone(), child.scope()))
        .collect();

    let wrappers = get_module_dependency_artifacts(
        &direct,
        &declared,
        &libraries,
        &mut input.cache,
        &source,
        use_osgi,
    )?;

    if wrappers.is_empty() {
        println!("no module dependencies");
        return Ok(());
    }
    for wrapper in &wrappers {
        let mut flags = Vec::new();
        if wrapper.osgi {
            flags.push("osgi");
        }
        if wrapper.transitive {
            flags.push("transitive");
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!(
            "{} -> {} ({}){suffix}",
            wrapper.artifact,
            wrapper.dependency.id(),
            wrapper.dependency.kind().as_str(),
        );
    }
    Ok(())
}

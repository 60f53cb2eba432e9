//! `nbpack libraries` command

use anyhow::Result;

use crate::cli::LibrariesArgs;
use crate::commands::tree_input::load_tree;
use nbpack::manifest::FsManifestSource;
use nbpack::ops::get_library_artifacts;
use nbpack::util::Config;

pub fn execute(args: LibrariesArgs, config: &Config) -> Result<()> {
    let mut input = load_tree(&args.tree)?;
    let use_osgi = args.osgi || config.modules.use_osgi_dependencies;

    let source = FsManifestSource;
    let libraries = get_library_artifacts(
        &input.root,
        &config.modules.libraries,
        &input.runtime,
        &mut input.cache,
        &source,
        use_osgi,
    )?;

    if libraries.is_empty() {
        println!("no class-path libraries");
        return Ok(());
    }
    for artifact in &libraries {
        println!("{artifact}");
    }
    Ok(())
}

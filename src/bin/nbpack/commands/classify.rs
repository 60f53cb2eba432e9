//! `nbpack classify` command

use anyhow::Result;

use crate::cli::ClassifyArgs;
use nbpack::ops::{classify_path, ClassificationReport};

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let classification = classify_path(&args.path, args.dependencies)?;
    let report = ClassificationReport::from_classification(&classification);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let kind = if report.netbeans_module {
        "NetBeans module"
    } else if report.osgi_bundle {
        "OSGi bundle"
    } else {
        "plain jar"
    };
    println!("{}: {kind}", args.path.display());
    if let Some(code_name_base) = &report.code_name_base {
        println!("  code name base: {code_name_base}");
    }
    if let Some(spec) = &report.specification_version {
        println!("  specification version: {spec}");
    }
    if let Some(impl_version) = &report.implementation_version {
        println!("  implementation version: {impl_version}");
    }
    if report.netbeans_module || report.osgi_bundle {
        println!(
            "  public packages: {}",
            if report.public_packages { "yes" } else { "no" }
        );
    }
    if report.friend_packages {
        println!("  friends: {}", report.friends.join(", "));
    }
    for dep in &report.dependencies {
        println!("  dependency: {dep}");
    }
    for token in &report.requires {
        println!("  requires: {token}");
    }
    for import in &report.osgi_imports {
        println!("  import: {import}");
    }
    Ok(())
}

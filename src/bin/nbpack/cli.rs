//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nbpack - NetBeans module packaging toolkit
#[derive(Parser)]
#[command(name = "nbpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to nbpack.toml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a jar manifest as NetBeans module, OSGi bundle or plain jar
    Classify(ClassifyArgs),

    /// Collect the class-path libraries from a dependency tree
    Libraries(LibrariesArgs),

    /// Resolve module dependencies from a dependency tree
    Modules(ModulesArgs),

    /// Plan cluster membership from NBM packaging descriptors
    Clusters(ClustersArgs),

    /// Adapt a Maven version to a NetBeans spec or impl version
    Version(VersionArgs),
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Manifest file or exploded jar directory
    pub path: PathBuf,

    /// Also parse declared dependency and capability tokens
    #[arg(short, long)]
    pub dependencies: bool,

    /// Emit the classification as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LibrariesArgs {
    /// Dependency tree description (JSON)
    pub tree: PathBuf,

    /// Treat OSGi bundles as module dependencies
    #[arg(long)]
    pub osgi: bool,
}

#[derive(Args)]
pub struct ModulesArgs {
    /// Dependency tree description (JSON)
    pub tree: PathBuf,

    /// Treat OSGi bundles as module dependencies
    #[arg(long)]
    pub osgi: bool,
}

#[derive(Args)]
pub struct ClustersArgs {
    /// Directory scanned recursively for Info/info.xml descriptors
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct VersionArgs {
    /// Maven version to adapt
    pub version: String,

    /// Produce an implementation version instead of a specification one
    #[arg(long)]
    pub implementation: bool,

    /// Date used for SNAPSHOT substitution (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

//! nbpack CLI - NetBeans module packaging toolkit

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("nbpack=debug")
    } else {
        EnvFilter::new("nbpack=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = commands::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Libraries(args) => commands::libraries::execute(args, &config),
        Commands::Modules(args) => commands::modules::execute(args, &config),
        Commands::Clusters(args) => commands::clusters::execute(args, &config),
        Commands::Version(args) => commands::version::execute(args),
    }
}

use clap::Parser;
use color_eyre::Result;
use consul_peering_setup::orchestrator;
use consul_peering_setup::terraform::OutputPaths;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Generate Terraform peering declarations for a set of Consul clusters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON cluster list
    config: PathBuf,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Configuration file: {:?}", args.config);

    let summary = orchestrator::run(&args.config, &OutputPaths::in_dir("."))?;

    info!(
        "Generated {} provider(s), {} peering token(s) and {} peering(s)",
        summary.providers, summary.acceptors, summary.dialers
    );
    Ok(())
}

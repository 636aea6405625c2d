//! tenant-power - power-schedule management for tenant namespaces
//!
//! Converts a tenant's local off/on schedule into kube-green SleepInfo
//! objects in UTC, with dependency-ordered staggered wake-up for the
//! datastores tier, and optionally applies them with kubectl.

use clap::Parser;

mod commands;
mod output;
mod reconcile;


use commands::Cli;

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(error) = cli.run() {
        eprintln!("[ERROR] {error:#}");
        std::process::exit(1);
    }
}

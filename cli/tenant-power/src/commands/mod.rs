//! CLI commands.

mod create;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Power-schedule management for tenant namespaces.
///
/// Times are given in the platform's local zone (America/Bogota) and
/// converted to UTC; weekdays accept Spanish day names ("lunes-viernes",
/// "sábado") or numeric form ("1-5", 0 = Sunday).
#[derive(Debug, Parser)]
#[command(name = "tenant-power")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the power-schedule objects for a tenant
    Create(create::CreateCommand),

    /// Update the power-schedule objects for a tenant
    Update(create::CreateCommand),

    /// Show the schedules currently applied for a tenant
    Show(show::ShowCommand),
}

impl Cli {
    /// Run the selected command.
    pub fn run(self) -> Result<()> {
        match self.command {
            // Update is create run again: generation is deterministic and
            // apply prunes whatever no longer belongs.
            Commands::Create(cmd) | Commands::Update(cmd) => cmd.run(),
            Commands::Show(cmd) => cmd.run(),
        }
    }
}

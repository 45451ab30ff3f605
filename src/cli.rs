// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stackpilot")]
#[command(about = "Unattended phased deployment for local multi-service container stacks")]
#[command(version)]
pub struct Cli {
    /// Enable verbose diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a stackpilot.yml with the default deployment plan
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Run every deployment phase in order
    Deploy(ConfigArgs),

    /// Only poll the configured health endpoints
    Verify(ConfigArgs),

    /// Show the phases and steps without running anything
    Plan(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to the configuration file (default: discovered in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use the built-in plan instead of a configuration file
    #[arg(long, conflicts_with = "config")]
    pub defaults: bool,
}

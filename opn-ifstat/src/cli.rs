use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "opn-ifstat")]
#[command(about = "Inspect OPNsense interface diagnostics dumps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Show one resolved interface from a diagnostics dump.
    Show(ShowArgs),
    /// List all interfaces in a diagnostics dump.
    List(ListArgs),
    /// Check a diagnostics dump for inconsistent records.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Diagnostics dump file (JSON from getInterfaceConfig).
    pub file: PathBuf,
    /// Device name to resolve (e.g. em0).
    #[arg(short, long)]
    pub device: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Diagnostics dump file (JSON from getInterfaceConfig).
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Include media and group details per interface.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Diagnostics dump file (JSON from getInterfaceConfig).
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Fail on warnings as well as errors.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

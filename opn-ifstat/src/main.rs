use anyhow::Result;
use clap::Parser;

mod check_cmd;
mod cli;
mod list_cmd;
mod show_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show(args) => show_cmd::run_show(args),
        Command::List(args) => list_cmd::run_list(args),
        Command::Check(args) => check_cmd::run_check(args),
    }
}

use anyhow::{Context, Result};
use ifconfig_core::parse_file;
use opn_ifstat::inventory::build_inventory;
use opn_ifstat::report::render_inventory;

use crate::cli::{ListArgs, OutputFormat};

pub fn run_list(args: ListArgs) -> Result<()> {
    let records = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let rows = build_inventory(&records);

    match args.format {
        OutputFormat::Text => println!("{}", render_inventory(&rows, args.verbose)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

use anyhow::{Context, Result};
use ifconfig_core::{format_json, parse_file, resolve};
use opn_ifstat::report::render_interface;

use crate::cli::{OutputFormat, ShowArgs};

pub fn run_show(args: ShowArgs) -> Result<()> {
    let records = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let model = resolve(&records, &args.device)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_interface(&model)),
        OutputFormat::Json => println!("{}", format_json(&model)),
    }

    Ok(())
}

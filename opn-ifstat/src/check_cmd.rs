use anyhow::{bail, Context, Result};
use ifconfig_core::parse_file;
use opn_ifstat::report::render_findings;
use opn_ifstat::verify::{dump_findings, error_count};

use crate::cli::{CheckArgs, OutputFormat};

pub fn run_check(args: CheckArgs) -> Result<()> {
    let records = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let findings = dump_findings(&records);

    match args.format {
        OutputFormat::Text => println!("{}", render_findings(&findings)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&findings)?),
    }

    let errors = error_count(&findings);
    if errors > 0 {
        bail!("check failed: {errors} errors");
    }
    let warnings = findings.len() - errors;
    if args.strict && warnings > 0 {
        bail!("check failed in strict mode: {warnings} warnings");
    }
    Ok(())
}

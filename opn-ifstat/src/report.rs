use colored::Colorize;
use ifconfig_core::{format_text, InterfaceModel};

use crate::inventory::InterfaceRow;
use crate::verify::{CheckFinding, FindingSeverity};

/// Render a resolved interface for terminal output.
pub fn render_interface(model: &InterfaceModel) -> String {
    let raw = format_text(model);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if let Some(status) = line.strip_prefix("status=") {
            format!("status={}", colorize_status(status))
        } else if line == "ipv4:" || line == "ipv6:" {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render inventory rows for terminal output.
pub fn render_inventory(rows: &[InterfaceRow], verbose: bool) -> String {
    let mut out = Vec::new();
    out.push("interfaces".to_string());
    for row in rows {
        let mut line = format!(
            "- {}: status={} physical={} macaddr={} mtu={} ipv4={} ipv6={}",
            row.device,
            colorize_status(&row.status),
            row.is_physical,
            row.macaddr,
            row.mtu
                .map(|mtu| mtu.to_string())
                .unwrap_or_else(|| "-".to_string()),
            row.ipv4_count,
            row.ipv6_count
        );
        if verbose {
            line.push_str(&format!(
                " media={} groups={}",
                row.media,
                row.groups.join(",")
            ));
        }
        out.push(line);
    }
    out.join("\n")
}

/// Render check findings and a summary count line.
pub fn render_findings(findings: &[CheckFinding]) -> String {
    let mut out = Vec::new();
    let mut errors = 0;
    let mut warnings = 0;

    for finding in findings {
        let prefix = match finding.severity {
            FindingSeverity::Error => {
                errors += 1;
                "ERROR".red().to_string()
            }
            FindingSeverity::Warning => {
                warnings += 1;
                "WARN".yellow().to_string()
            }
        };
        out.push(format!("{prefix} {} {}", finding.code, finding.message));
    }

    out.push(format!("result errors={errors} warnings={warnings}"));
    out.join("\n")
}

fn colorize_status(status: &str) -> String {
    match status {
        "up" => status.green().to_string(),
        "down" => status.red().to_string(),
        _ => status.yellow().to_string(),
    }
}

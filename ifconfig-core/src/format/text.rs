use std::collections::BTreeSet;

use crate::resolve::InterfaceModel;

/// Format a resolved interface as plain text.
///
/// One `key=value` line per scalar field, comma-joined set lines, and one
/// `- addr/prefix` line per address in input order.
pub fn format_text(model: &InterfaceModel) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "device={} physical={}",
        model.device, model.is_physical
    ));
    lines.push(format!("status={}", model.status));
    lines.push(format!("macaddr={}", model.macaddr));
    lines.push(format!(
        "mtu={}",
        model
            .mtu
            .map(|mtu| mtu.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!("media={}", model.media));
    lines.push(format!("media_raw={}", model.media_raw));

    push_set(&mut lines, "flags", &model.flags);
    push_set(&mut lines, "capabilities", &model.capabilities);
    push_set(&mut lines, "options", &model.options);
    push_set(&mut lines, "supported_media", &model.supported_media);
    push_set(&mut lines, "groups", &model.groups);

    lines.push("ipv4:".to_string());
    for addr in &model.ipv4 {
        lines.push(format!(
            "- {}/{} tunnel={}",
            addr.ipaddr, addr.subnetbits, addr.tunnel
        ));
    }
    lines.push("ipv6:".to_string());
    for addr in &model.ipv6 {
        lines.push(format!(
            "- {}/{} tunnel={} autoconf={} deprecated={} link_local={} tentative={}",
            addr.ipaddr,
            addr.subnetbits,
            addr.tunnel,
            addr.autoconf,
            addr.deprecated,
            addr.link_local,
            addr.tentative
        ));
    }

    lines.join("\n")
}

fn push_set(lines: &mut Vec<String>, label: &str, values: &BTreeSet<String>) {
    let joined = values.iter().cloned().collect::<Vec<_>>().join(",");
    lines.push(format!("{label}: {joined}"));
}

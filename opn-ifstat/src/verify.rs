//! Consistency checks over a whole diagnostics dump.
//!
//! The resolver deliberately tolerates malformed upstream data (an
//! unparseable MTU simply projects to absent). These checks make such
//! records visible instead of silent:
//!
//! 1. **Key mismatch** — map key differs from the record's own device field
//! 2. **Invalid MTU** — MTU present but not numeric
//! 3. **Subnet range** — IPv4 prefix outside 0-32, IPv6 outside 0-128
//! 4. **Duplicate address** — same address listed twice on one interface
//! 5. **Missing macaddr** — physical interface without a hardware address

use std::collections::{BTreeMap, BTreeSet};

use ifconfig_core::InterfaceConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFinding {
    pub severity: FindingSeverity,
    pub code: String,
    pub message: String,
}

/// Find all record-level problems in a dump.
///
/// Returns findings in dump order (sorted by device name). Empty if the
/// dump is clean.
pub fn dump_findings(records: &BTreeMap<String, InterfaceConfig>) -> Vec<CheckFinding> {
    let mut out = Vec::new();
    for (device, record) in records {
        out.extend(key_findings(device, record));
        out.extend(mtu_findings(device, record));
        out.extend(address_findings(device, record));
        out.extend(macaddr_findings(device, record));
    }
    out
}

/// Count error-severity findings.
pub fn error_count(findings: &[CheckFinding]) -> usize {
    findings
        .iter()
        .filter(|f| f.severity == FindingSeverity::Error)
        .count()
}

fn key_findings(device: &str, record: &InterfaceConfig) -> Vec<CheckFinding> {
    if record.device.is_empty() || record.device == device {
        return Vec::new();
    }
    vec![CheckFinding {
        severity: FindingSeverity::Error,
        code: "device_key_mismatch".to_string(),
        message: format!(
            "record under key '{device}' reports device '{}'",
            record.device
        ),
    }]
}

fn mtu_findings(device: &str, record: &InterfaceConfig) -> Vec<CheckFinding> {
    let raw = record.mtu.trim();
    if raw.is_empty() || raw.parse::<i64>().is_ok() {
        return Vec::new();
    }
    vec![CheckFinding {
        severity: FindingSeverity::Warning,
        code: "invalid_mtu".to_string(),
        message: format!("interface '{device}' has non-numeric mtu '{raw}'"),
    }]
}

fn address_findings(device: &str, record: &InterfaceConfig) -> Vec<CheckFinding> {
    let mut out = Vec::new();

    let mut seen_v4 = BTreeSet::new();
    for addr in &record.ipv4 {
        if !(0..=32).contains(&addr.subnetbits) {
            out.push(subnet_finding(device, &addr.ipaddr, addr.subnetbits, 32));
        }
        if !seen_v4.insert(addr.ipaddr.as_str()) {
            out.push(duplicate_finding(device, &addr.ipaddr));
        }
    }

    let mut seen_v6 = BTreeSet::new();
    for addr in &record.ipv6 {
        if !(0..=128).contains(&addr.subnetbits) {
            out.push(subnet_finding(device, &addr.ipaddr, addr.subnetbits, 128));
        }
        if !seen_v6.insert(addr.ipaddr.as_str()) {
            out.push(duplicate_finding(device, &addr.ipaddr));
        }
    }

    out
}

fn subnet_finding(device: &str, ipaddr: &str, bits: i64, max: i64) -> CheckFinding {
    CheckFinding {
        severity: FindingSeverity::Error,
        code: "subnet_out_of_range".to_string(),
        message: format!(
            "interface '{device}' address '{ipaddr}' has prefix length {bits} outside 0-{max}"
        ),
    }
}

fn duplicate_finding(device: &str, ipaddr: &str) -> CheckFinding {
    CheckFinding {
        severity: FindingSeverity::Warning,
        code: "duplicate_address".to_string(),
        message: format!("interface '{device}' lists address '{ipaddr}' more than once"),
    }
}

fn macaddr_findings(device: &str, record: &InterfaceConfig) -> Vec<CheckFinding> {
    if !record.is_physical || !record.macaddr.trim().is_empty() {
        return Vec::new();
    }
    vec![CheckFinding {
        severity: FindingSeverity::Warning,
        code: "missing_macaddr".to_string(),
        message: format!("physical interface '{device}' has no hardware address"),
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ifconfig_core::{InterfaceConfig, Ipv4Config};

    use super::{dump_findings, error_count, FindingSeverity};

    fn dump_with(device: &str, record: InterfaceConfig) -> BTreeMap<String, InterfaceConfig> {
        let mut records = BTreeMap::new();
        records.insert(device.to_string(), record);
        records
    }

    #[test]
    fn clean_record_has_no_findings() {
        let records = dump_with(
            "em0",
            InterfaceConfig {
                device: "em0".to_string(),
                macaddr: "00:11:22:33:44:55".to_string(),
                is_physical: true,
                mtu: "1500".to_string(),
                ..InterfaceConfig::default()
            },
        );
        assert!(dump_findings(&records).is_empty());
    }

    #[test]
    fn detects_device_key_mismatch_as_error() {
        let records = dump_with(
            "em0",
            InterfaceConfig {
                device: "em1".to_string(),
                ..InterfaceConfig::default()
            },
        );
        let findings = dump_findings(&records);
        assert!(findings.iter().any(|f| f.code == "device_key_mismatch"
            && f.severity == FindingSeverity::Error));
        assert_eq!(error_count(&findings), 1);
    }

    #[test]
    fn empty_device_field_does_not_trip_key_check() {
        let records = dump_with("em0", InterfaceConfig::default());
        assert!(dump_findings(&records)
            .iter()
            .all(|f| f.code != "device_key_mismatch"));
    }

    #[test]
    fn warns_on_non_numeric_mtu() {
        let records = dump_with(
            "em0",
            InterfaceConfig {
                device: "em0".to_string(),
                mtu: "auto".to_string(),
                ..InterfaceConfig::default()
            },
        );
        let findings = dump_findings(&records);
        assert!(findings
            .iter()
            .any(|f| f.code == "invalid_mtu" && f.severity == FindingSeverity::Warning));
        assert_eq!(error_count(&findings), 0);
    }

    #[test]
    fn flags_out_of_range_prefix_and_duplicate_address() {
        let records = dump_with(
            "em0",
            InterfaceConfig {
                device: "em0".to_string(),
                ipv4: vec![
                    Ipv4Config {
                        ipaddr: "10.0.0.1".to_string(),
                        subnetbits: 33,
                        tunnel: false,
                    },
                    Ipv4Config {
                        ipaddr: "10.0.0.1".to_string(),
                        subnetbits: 24,
                        tunnel: false,
                    },
                ],
                ..InterfaceConfig::default()
            },
        );
        let findings = dump_findings(&records);
        assert!(findings.iter().any(|f| f.code == "subnet_out_of_range"));
        assert!(findings.iter().any(|f| f.code == "duplicate_address"));
    }

    #[test]
    fn warns_on_physical_interface_without_macaddr() {
        let records = dump_with(
            "igb0",
            InterfaceConfig {
                device: "igb0".to_string(),
                is_physical: true,
                ..InterfaceConfig::default()
            },
        );
        let findings = dump_findings(&records);
        assert!(findings.iter().any(|f| f.code == "missing_macaddr"));
    }
}

//! Per-interface summary rows for the `list` command.

use std::collections::BTreeMap;

use ifconfig_core::InterfaceConfig;
use serde::Serialize;

/// One summary line of the interface inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceRow {
    pub device: String,
    pub status: String,
    pub macaddr: String,
    pub mtu: Option<i64>,
    pub is_physical: bool,
    pub ipv4_count: usize,
    pub ipv6_count: usize,
    pub media: String,
    pub groups: Vec<String>,
}

/// Build inventory rows for every interface in the dump, sorted by the
/// device name the dump keys records under.
pub fn build_inventory(records: &BTreeMap<String, InterfaceConfig>) -> Vec<InterfaceRow> {
    records
        .iter()
        .map(|(device, record)| InterfaceRow {
            device: device.clone(),
            status: record.status.clone(),
            macaddr: record.macaddr.clone(),
            mtu: record.mtu_value(),
            is_physical: record.is_physical,
            ipv4_count: record.ipv4.len(),
            ipv6_count: record.ipv6.len(),
            media: record.media.clone(),
            groups: record.groups.clone(),
        })
        .collect()
}

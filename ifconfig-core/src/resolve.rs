use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;

use crate::model::{InterfaceConfig, Ipv4Config, Ipv6Config};

/// Errors that can occur while resolving a device name against a dump.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Requested device name has no record in the dump.
    #[error("cannot find interface {0}")]
    NotFound(String),
}

/// Flattened projection of one resolved interface.
///
/// Scalar fields are copied verbatim from the source record. Flag-like
/// string lists become sets (their order carries no meaning upstream),
/// while address lists keep their input order. MTU is an explicit option,
/// never a sentinel zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceModel {
    pub device: String,
    pub media: String,
    pub media_raw: String,
    pub macaddr: String,
    pub is_physical: bool,
    pub mtu: Option<i64>,
    pub status: String,
    pub flags: BTreeSet<String>,
    pub capabilities: BTreeSet<String>,
    pub options: BTreeSet<String>,
    pub supported_media: BTreeSet<String>,
    pub groups: BTreeSet<String>,
    pub ipv4: Vec<Ipv4Address>,
    pub ipv6: Vec<Ipv6Address>,
}

/// Typed IPv4 address entry of a resolved interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Address {
    pub ipaddr: String,
    pub subnetbits: i64,
    pub tunnel: bool,
}

/// Typed IPv6 address entry of a resolved interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Address {
    pub ipaddr: String,
    pub subnetbits: i64,
    pub tunnel: bool,
    pub autoconf: bool,
    pub deprecated: bool,
    pub link_local: bool,
    pub tentative: bool,
}

/// Resolve `device` against a diagnostics dump.
///
/// Looks up the record under the requested device name and projects it
/// into an [`InterfaceModel`]. The projection is a pure field-for-field
/// copy under the stated type coercions; nothing is derived or defaulted
/// beyond the MTU null handling.
///
/// # Errors
///
/// [`ResolveError::NotFound`] when the dump has no record for `device`.
/// This is the only failure mode.
pub fn resolve(
    records: &BTreeMap<String, InterfaceConfig>,
    device: &str,
) -> Result<InterfaceModel, ResolveError> {
    let record = records
        .get(device)
        .ok_or_else(|| ResolveError::NotFound(device.to_string()))?;

    Ok(InterfaceModel {
        device: record.device.clone(),
        media: record.media.clone(),
        media_raw: record.media_raw.clone(),
        macaddr: record.macaddr.clone(),
        is_physical: record.is_physical,
        mtu: record.mtu_value(),
        status: record.status.clone(),
        flags: to_set(&record.flags),
        capabilities: to_set(&record.capabilities),
        options: to_set(&record.options),
        supported_media: to_set(&record.supported_media),
        groups: to_set(&record.groups),
        ipv4: record.ipv4.iter().map(ipv4_address).collect(),
        ipv6: record.ipv6.iter().map(ipv6_address).collect(),
    })
}

fn to_set(values: &[String]) -> BTreeSet<String> {
    values.iter().cloned().collect()
}

fn ipv4_address(entry: &Ipv4Config) -> Ipv4Address {
    Ipv4Address {
        ipaddr: entry.ipaddr.clone(),
        subnetbits: entry.subnetbits,
        tunnel: entry.tunnel,
    }
}

fn ipv6_address(entry: &Ipv6Config) -> Ipv6Address {
    Ipv6Address {
        ipaddr: entry.ipaddr.clone(),
        subnetbits: entry.subnetbits,
        tunnel: entry.tunnel,
        autoconf: entry.autoconf,
        deprecated: entry.deprecated,
        link_local: entry.link_local,
        tentative: entry.tentative,
    }
}

use serde::{Deserialize, Serialize};

/// One interface record as delivered by the diagnostics API.
///
/// The upstream payload is permissive: any field may be missing, and the
/// MTU arrives as a string that can be empty for interfaces without one
/// (loopbacks, some tunnels).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Device name (e.g. "em0").
    pub device: String,
    /// Parsed media type (e.g. "1000baseT <full-duplex>").
    pub media: String,
    /// Raw media string as reported by the driver.
    pub media_raw: String,
    /// Hardware address.
    pub macaddr: String,
    /// Whether this is a physical NIC rather than a virtual device.
    pub is_physical: bool,
    /// MTU as a raw string, possibly empty.
    pub mtu: String,
    /// Link status (e.g. "up", "down", "no carrier").
    pub status: String,
    pub flags: Vec<String>,
    pub capabilities: Vec<String>,
    pub options: Vec<String>,
    pub supported_media: Vec<String>,
    pub groups: Vec<String>,
    pub ipv4: Vec<Ipv4Config>,
    pub ipv6: Vec<Ipv6Config>,
}

impl InterfaceConfig {
    /// MTU as a number, or `None` when the raw string is empty or not
    /// numeric. Upstream never distinguishes the two cases.
    pub fn mtu_value(&self) -> Option<i64> {
        let raw = self.mtu.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok()
    }
}

/// An IPv4 address bound to an interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ipv4Config {
    pub ipaddr: String,
    pub subnetbits: i64,
    pub tunnel: bool,
}

/// An IPv6 address bound to an interface, with its address-state flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ipv6Config {
    pub ipaddr: String,
    pub subnetbits: i64,
    pub tunnel: bool,
    pub autoconf: bool,
    pub deprecated: bool,
    #[serde(rename = "link-local")]
    pub link_local: bool,
    pub tentative: bool,
}

//! Typed model, parsing, and resolution for OPNsense interface diagnostics.
//!
//! OPNsense exposes the live state of every network interface through its
//! diagnostics API (`getInterfaceConfig`) as a JSON object keyed by device
//! name. This crate turns such a dump into typed records and resolves a
//! single requested interface into a flattened, presentation-ready model.

pub mod format;
pub mod model;
pub mod parser;
pub mod resolve;

pub use format::{format_json, format_text};
pub use model::{InterfaceConfig, Ipv4Config, Ipv6Config};
pub use parser::{parse, parse_file, ParseError};
pub use resolve::{resolve, InterfaceModel, Ipv4Address, Ipv6Address, ResolveError};

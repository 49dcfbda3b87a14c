//! CLI-side building blocks for inspecting OPNsense interface diagnostics.
//!
//! - [`inventory`] — Per-interface summary rows for the `list` command
//! - [`verify`] — Consistency findings over a whole dump for `check`
//! - [`report`] — Terminal-friendly colored rendering
//!
//! Parsing and resolution live in `ifconfig-core`; this crate only
//! aggregates and presents.

pub mod inventory;
pub mod report;
pub mod verify;

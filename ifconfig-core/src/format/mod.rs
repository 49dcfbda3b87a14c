//! Plain renderings of a resolved interface. Color is a CLI concern and
//! lives in the `opn-ifstat` crate.

mod json;
mod text;

pub use json::format_json;
pub use text::format_text;

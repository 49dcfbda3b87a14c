use crate::resolve::InterfaceModel;

/// Format a resolved interface as pretty-printed JSON.
pub fn format_json(model: &InterfaceModel) -> String {
    serde_json::to_string_pretty(model).unwrap_or_else(|_| "{}".to_string())
}

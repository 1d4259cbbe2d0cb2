//! JSON rendering of the assembled document.

use crate::domain::OutputConfig;

/// Serialize the document as two-space-indented JSON.
///
/// The document and everything nested in it are `serde_json` maps, which are
/// BTreeMap-backed, so object keys come out in lexicographic (byte) order at
/// every level. The caller appends the trailing newline.
pub fn render_json(config: &OutputConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}

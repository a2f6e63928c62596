//! Structured JSON export

use crate::ExportError;
use webreel_model::ExportDocument;

/// Render the document as stable, pretty-printed JSON.
///
/// The video payload is never embedded; only the `videoData` reference
/// travels.
pub fn render_json(doc: &ExportDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

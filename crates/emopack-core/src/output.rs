//! Writing the merged document to disk.

use std::path::Path;

use crate::error::CoreError;
use crate::types::EmojiDocument;

/// Render the document as indented JSON. Non-ASCII text (package and emote
/// names are mostly Chinese) is written as-is, not `\u` escaped.
pub fn render_document(document: &EmojiDocument) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document to `path`, replacing any existing file. Missing
/// parent directories are created.
pub fn write_document(path: &Path, document: &EmojiDocument) -> Result<(), CoreError> {
    let content = render_document(document)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), packages = document.packages.len(), "wrote emoji document");
    Ok(())
}

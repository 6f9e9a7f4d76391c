//! Single dispatch point from raw bytes to a [`Document`].
//!
//! TOML and YAML map declaratively onto the model by field name; Markdown goes
//! through the frontmatter heuristic in [`crate::prose`].

use std::path::Path;

use docmerge_types::{Document, Provenance, Syntax};
use tracing::debug;

use crate::error::{NormalizeError, NormalizeResult};
use crate::prose::parse_prose;

/// Label used for inputs that have no originating file.
const ANONYMOUS_SOURCE: &str = "<input>";

/// Normalize raw bytes written in `syntax` into a document.
///
/// The result carries provenance with the syntax but no path.
pub fn normalize(bytes: &[u8], syntax: Syntax) -> NormalizeResult<Document> {
    normalize_source(bytes, syntax, None)
}

/// Like [`normalize`], but records `path` in provenance and in parse errors.
pub fn normalize_file(bytes: &[u8], syntax: Syntax, path: &Path) -> NormalizeResult<Document> {
    normalize_source(bytes, syntax, Some(path))
}

fn normalize_source(bytes: &[u8], syntax: Syntax, path: Option<&Path>) -> NormalizeResult<Document> {
    let label = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ANONYMOUS_SOURCE.to_string());

    let text = std::str::from_utf8(bytes)
        .map_err(|e| NormalizeError::parse(syntax, &label, format!("input is not valid UTF-8: {e}")))?;

    let mut doc = match syntax {
        Syntax::Toml => parse_toml(text, &label)?,
        Syntax::Yaml => parse_yaml(text, &label)?,
        Syntax::Markdown => parse_prose(text, &label)?,
    };

    doc.provenance = Some(Provenance::new(path.map(Path::to_path_buf), syntax));
    debug!(
        source = %label,
        %syntax,
        sections = doc.sections.len(),
        merge_points = doc.merge_points.len(),
        merge_targets = doc.merge_targets.len(),
        "normalized document"
    );
    Ok(doc)
}

fn parse_toml(text: &str, label: &str) -> NormalizeResult<Document> {
    toml::from_str(text).map_err(|e| NormalizeError::parse(Syntax::Toml, label, e.to_string()))
}

fn parse_yaml(text: &str, label: &str) -> NormalizeResult<Document> {
    // An empty YAML stream is a valid, empty document.
    if text.trim().is_empty() {
        return Ok(Document::new());
    }
    serde_yaml::from_str(text).map_err(|e| NormalizeError::parse(Syntax::Yaml, label, e.to_string()))
}

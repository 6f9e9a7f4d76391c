//! Reading documents from disk.

use std::fs;
use std::path::Path;

use docmerge_types::{Document, Syntax};
use tracing::debug;

use crate::error::{NormalizeError, NormalizeResult};
use crate::normalize::normalize_file;

/// Read `path`, infer its syntax from the extension, and normalize it.
///
/// The returned document's provenance records `path` and the inferred syntax.
pub fn load_document(path: impl AsRef<Path>) -> NormalizeResult<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| NormalizeError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let syntax = Syntax::from_path(path)
        .map_err(|_| NormalizeError::UnsupportedSyntax(path.display().to_string()))?;
    debug!(path = %path.display(), %syntax, bytes = bytes.len(), "loading document");
    normalize_file(&bytes, syntax, path)
}

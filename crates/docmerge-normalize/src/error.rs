//! Error types for the normalizer crate.

use std::path::PathBuf;

use docmerge_types::Syntax;

/// Errors that can occur while reading, normalizing or validating a document.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The input file could not be read.
    #[error("failed to read file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a supported syntax.
    #[error("unsupported file format for {0}")]
    UnsupportedSyntax(String),

    /// The structured syntax (or prose frontmatter) failed to decode.
    #[error("{syntax} parse error in {path}: {message}")]
    SyntaxParse {
        syntax: Syntax,
        path: String,
        message: String,
    },

    /// The document was rejected by validation.
    #[error("invalid document {path}: {reason}")]
    Validation { path: String, reason: String },
}

impl NormalizeError {
    pub(crate) fn parse(syntax: Syntax, path: &str, message: impl Into<String>) -> Self {
        Self::SyntaxParse {
            syntax,
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience alias for normalizer results.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

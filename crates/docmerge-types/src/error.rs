use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown priority type: {0}")]
    UnknownPriorityKind(String),

    #[error("unsupported file format for {0}")]
    UnsupportedSyntax(String),
}

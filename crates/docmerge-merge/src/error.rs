/// Errors that can occur during a merge.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// The merge was invoked with zero documents.
    #[error("no documents to merge")]
    EmptyMergeSet,
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;

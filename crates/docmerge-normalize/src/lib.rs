//! Format normalizer for docmerge.
//!
//! Turns raw bytes in one of three surface syntaxes into the canonical
//! [`Document`](docmerge_types::Document) model, reads documents from disk,
//! and validates them before or after merging.
//!
//! # Key Items
//!
//! - [`normalize`] / [`normalize_file`] -- bytes + syntax into a document
//! - [`load_document`] -- read a file, infer its syntax, normalize
//! - [`validate`] -- reject untitled, empty or negatively prioritized documents

pub mod error;
pub mod loader;
pub mod normalize;
pub mod prose;
pub mod validate;

pub use error::{NormalizeError, NormalizeResult};
pub use loader::load_document;
pub use normalize::{normalize, normalize_file};
pub use prose::{CONTENT_SECTION, UNTITLED_TITLE};
pub use validate::validate;

//! Canonical document model for docmerge.
//!
//! Every surface syntax (TOML, YAML, Markdown) normalizes into the types in
//! this crate, and every other docmerge crate depends on `docmerge-types`.
//!
//! # Key Types
//!
//! - [`Document`]: Metadata plus named sections, merge points and merge targets
//! - [`Priority`]: Tagged none/relative/explicit precedence with its comparator
//! - [`Syntax`]: The closed set of supported surface syntaxes
//! - [`MergeStrategy`]: How merge target content combines with a merge point

pub mod document;
pub mod error;
pub mod priority;
pub mod strategy;
pub mod syntax;

pub use document::{Document, MergePoint, MergeTarget, Metadata, Provenance, Section};
pub use error::TypeError;
pub use priority::{Priority, PriorityKind};
pub use strategy::MergeStrategy;
pub use syntax::Syntax;

//! Merge engine for docmerge.
//!
//! Folds an ordered sequence of canonical documents into one, resolving
//! conflicts per key with a three-tier priority scheme (explicit > relative >
//! position). When a document contains placeholder markers such as
//! `<test-cmds>` ... `</test-cmds>`, the engine instead treats it as a base
//! template and fills the markers with text extracted from the other
//! documents.
//!
//! # Quick Start
//!
//! ```rust
//! use docmerge_merge::{MergeConfig, MergeEngine};
//! use docmerge_types::{Document, Priority, Section};
//!
//! let common = Document::new()
//!     .with_title("Common")
//!     .with_section("intro", Section::with_content("shared").prioritized(Priority::relative(1)));
//! let local = Document::new()
//!     .with_section("intro", Section::with_content("local"));
//!
//! let engine = MergeEngine::with_default_extractors(MergeConfig::default());
//! let merged = engine.merge_all(&[common, local]).unwrap();
//! assert_eq!(merged.sections["intro"].content, "shared");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod markers;
pub mod template;

// Re-exports for convenience.
pub use config::MergeConfig;
pub use engine::{MergeEngine, MergeMode, MergeOutcome, Prioritized};
pub use error::{MergeError, MergeResult};
pub use extractor::PlaceholderExtractor;
pub use extractors::{DocumentationStandardsExtractor, TestCommandsExtractor};

use std::collections::BTreeMap;

use docmerge_types::{Document, MergePoint, MergeTarget, Metadata, Priority, Section};
use tracing::{debug, info};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::extractor::PlaceholderExtractor;
use crate::extractors::{DocumentationStandardsExtractor, TestCommandsExtractor};
use crate::template;

// ---------------------------------------------------------------------------
// MergeOutcome
// ---------------------------------------------------------------------------

/// Which algorithm produced a merge result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeMode {
    /// Per-key priority folding over the whole sequence.
    Standard,
    /// Template substitution seeded from the document at `base_index`.
    Template { base_index: usize },
}

/// The result of merging a document sequence.
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    /// The merged document. It carries no provenance.
    pub document: Document,
    /// The algorithm that ran.
    pub mode: MergeMode,
    /// Extracted replacement text by extractor name (template mode only).
    pub replacements: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Prioritized
// ---------------------------------------------------------------------------

/// Map entries that carry their own priority.
pub trait Prioritized {
    fn priority(&self) -> &Priority;
}

impl Prioritized for Section {
    fn priority(&self) -> &Priority {
        &self.priority
    }
}

impl Prioritized for MergePoint {
    fn priority(&self) -> &Priority {
        &self.priority
    }
}

impl Prioritized for MergeTarget {
    fn priority(&self) -> &Priority {
        &self.priority
    }
}

// ---------------------------------------------------------------------------
// MergeEngine
// ---------------------------------------------------------------------------

/// Folds an ordered sequence of documents into one.
///
/// Each invocation owns its accumulator; the engine itself holds only its
/// configuration and the ordered extractor list, so it can be reused.
pub struct MergeEngine {
    extractors: Vec<Box<dyn PlaceholderExtractor>>,
    config: MergeConfig,
}

impl MergeEngine {
    /// Create an engine with no placeholder extractors.
    ///
    /// Use [`Self::add_extractor`] to register extractors, or
    /// [`Self::with_default_extractors`] for the built-in set.
    pub fn new(config: MergeConfig) -> Self {
        Self {
            extractors: Vec::new(),
            config,
        }
    }

    /// Create an engine with the built-in extractors:
    /// test-commands -> documentation-standards
    pub fn with_default_extractors(config: MergeConfig) -> Self {
        let mut engine = Self::new(config);
        engine.add_extractor(Box::new(TestCommandsExtractor));
        engine.add_extractor(Box::new(DocumentationStandardsExtractor));
        engine
    }

    /// Append an extractor to the end of the list.
    pub fn add_extractor(&mut self, extractor: Box<dyn PlaceholderExtractor>) {
        self.extractors.push(extractor);
    }

    /// Registered extractors, in evaluation order.
    pub fn extractors(&self) -> &[Box<dyn PlaceholderExtractor>] {
        &self.extractors
    }

    /// Merge `docs` in sequence order and return only the merged document.
    pub fn merge_all(&self, docs: &[Document]) -> MergeResult<Document> {
        self.merge(docs).map(|outcome| outcome.document)
    }

    /// Merge `docs` in sequence order.
    ///
    /// If template substitution is enabled and any document contains a
    /// placeholder marker pair, the first such document becomes the base
    /// template. Otherwise every document is folded by priority, with ties
    /// going to the later document.
    pub fn merge(&self, docs: &[Document]) -> MergeResult<MergeOutcome> {
        if docs.is_empty() {
            return Err(MergeError::EmptyMergeSet);
        }

        let base_index = if self.config.template_substitution {
            template::find_base_template(docs)
        } else {
            None
        };

        match base_index {
            Some(base_index) => {
                info!(
                    base = %docs[base_index].source_label(),
                    documents = docs.len(),
                    "merging with template substitution"
                );
                let (document, replacements) =
                    template::merge_with_template(docs, base_index, &self.extractors);
                Ok(MergeOutcome {
                    document,
                    mode: MergeMode::Template { base_index },
                    replacements,
                })
            }
            None => {
                info!(documents = docs.len(), "merging by priority");
                Ok(MergeOutcome {
                    document: merge_standard(docs),
                    mode: MergeMode::Standard,
                    replacements: BTreeMap::new(),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Standard mode
// ---------------------------------------------------------------------------

fn merge_standard(docs: &[Document]) -> Document {
    docs.iter().fold(Document::new(), merge_into)
}

/// One fold step: `incoming` is merged over the accumulator.
fn merge_into(mut acc: Document, incoming: &Document) -> Document {
    let source = incoming.source_label();
    merge_metadata(&mut acc.metadata, &incoming.metadata);
    merge_keyed(&mut acc.sections, &incoming.sections, "section", &source);
    merge_keyed(&mut acc.merge_points, &incoming.merge_points, "merge point", &source);
    merge_keyed(&mut acc.merge_targets, &incoming.merge_targets, "merge target", &source);
    acc
}

/// Merge metadata field by field.
///
/// The title carries the representative priority: the accumulator's priority
/// changes only when the title is replaced, and the remaining fields compare
/// against the priority as it stands after that.
pub(crate) fn merge_metadata(acc: &mut Metadata, incoming: &Metadata) {
    if !incoming.title.is_empty()
        && (acc.title.is_empty() || incoming.priority.outranks_or_ties(&acc.priority))
    {
        acc.title = incoming.title.clone();
        acc.priority = incoming.priority;
    }

    let wins = incoming.priority.outranks_or_ties(&acc.priority);
    let fields = [
        (&mut acc.description, &incoming.description),
        (&mut acc.version, &incoming.version),
        (&mut acc.language, &incoming.language),
        (&mut acc.extends, &incoming.extends),
    ];
    for (slot, value) in fields {
        if !value.is_empty() && (slot.is_empty() || wins) {
            slot.clone_from(value);
        }
    }
}

/// Whole-value replacement per key when the incoming entry ranks at least as
/// high as the accumulated one.
fn merge_keyed<T: Prioritized + Clone>(
    acc: &mut BTreeMap<String, T>,
    incoming: &BTreeMap<String, T>,
    kind: &str,
    source: &str,
) {
    for (name, entry) in incoming {
        let replace = match acc.get(name) {
            None => true,
            Some(existing) => entry.priority().outranks_or_ties(existing.priority()),
        };
        if replace {
            debug!(%kind, %name, %source, priority = %entry.priority(), "merging");
            acc.insert(name.clone(), entry.clone());
        } else {
            debug!(%kind, %name, %source, priority = %entry.priority(), "skipping lower priority");
        }
    }
}

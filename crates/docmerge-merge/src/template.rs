//! Template substitution mode.
//!
//! One document containing placeholder markers seeds the result verbatim.
//! The other documents only contribute replacement text, located by the
//! engine's extractors, plus a possible title override.

use std::collections::BTreeMap;

use docmerge_types::Document;
use tracing::debug;

use crate::extractor::PlaceholderExtractor;
use crate::markers::{find_markers, has_marker_pair, replace_marker_block};

/// Index of the first document with a marker pair in any section.
pub fn find_base_template(docs: &[Document]) -> Option<usize> {
    docs.iter()
        .position(|doc| doc.sections.values().any(|s| has_marker_pair(&s.content)))
}

/// Run every extractor over every section of every non-base document.
///
/// Later findings replace earlier ones under the same extractor name.
pub fn collect_replacements(
    docs: &[Document],
    base_index: usize,
    extractors: &[Box<dyn PlaceholderExtractor>],
) -> BTreeMap<String, String> {
    let mut replacements = BTreeMap::new();
    for (index, doc) in docs.iter().enumerate() {
        if index == base_index {
            continue;
        }
        for (section_name, section) in &doc.sections {
            for extractor in extractors {
                if let Some(text) = extractor.extract(&section.content) {
                    debug!(
                        extractor = extractor.name(),
                        source = %doc.source_label(),
                        section = %section_name,
                        chars = text.len(),
                        "extracted placeholder content"
                    );
                    replacements.insert(extractor.name().to_string(), text);
                }
            }
        }
    }
    replacements
}

/// Replace every marker pair in `content`.
///
/// A marker resolves through the first extractor that fills its name;
/// markers with no extracted text collapse to nothing.
pub fn substitute(
    content: &str,
    replacements: &BTreeMap<String, String>,
    extractors: &[Box<dyn PlaceholderExtractor>],
) -> String {
    let mut result = content.to_string();
    for name in find_markers(content) {
        let replacement = extractors
            .iter()
            .find(|e| e.fills(&name))
            .and_then(|e| replacements.get(e.name()))
            .map(String::as_str)
            .unwrap_or("");
        debug!(marker = %name, filled = !replacement.is_empty(), "substituting placeholder");
        result = replace_marker_block(&result, &name, replacement);
    }
    result
}

/// Merge `docs` using the document at `base_index` as the template.
pub(crate) fn merge_with_template(
    docs: &[Document],
    base_index: usize,
    extractors: &[Box<dyn PlaceholderExtractor>],
) -> (Document, BTreeMap<String, String>) {
    let base = &docs[base_index];
    let mut result = Document {
        metadata: base.metadata.clone(),
        sections: base.sections.clone(),
        merge_points: base.merge_points.clone(),
        merge_targets: base.merge_targets.clone(),
        provenance: None,
    };

    let replacements = collect_replacements(docs, base_index, extractors);
    for section in result.sections.values_mut() {
        section.content = substitute(&section.content, &replacements, extractors);
    }

    // Each document is measured against the base priority, which is kept.
    // The last one that strictly outranks it supplies the title.
    for (index, doc) in docs.iter().enumerate() {
        if index == base_index || doc.metadata.title.is_empty() {
            continue;
        }
        if doc.metadata.priority.strictly_outranks(&base.metadata.priority) {
            debug!(title = %doc.metadata.title, source = %doc.source_label(), "overriding template title");
            result.metadata.title = doc.metadata.title.clone();
        }
    }

    (result, replacements)
}

//! Markdown normalization.
//!
//! Prose has no declarative mapping. An optional YAML frontmatter block
//! delimited by `---` lines feeds [`Metadata`]; everything else becomes a
//! single opaque section named [`CONTENT_SECTION`].

use docmerge_types::{Document, Metadata, Priority, PriorityKind, Section, Syntax};
use serde_yaml::Value;

use crate::error::{NormalizeError, NormalizeResult};

/// Reserved section name holding the body of a prose document.
pub const CONTENT_SECTION: &str = "content";

/// Title assigned to prose without frontmatter so validation accepts it.
pub const UNTITLED_TITLE: &str = "Untitled Document";

const FRONTMATTER_DELIMITER: &str = "---";

pub(crate) fn parse_prose(text: &str, label: &str) -> NormalizeResult<Document> {
    let mut doc = Document::new();

    match split_frontmatter(text) {
        Some((frontmatter, body)) => {
            apply_frontmatter(&mut doc.metadata, frontmatter)
                .map_err(|e| NormalizeError::parse(Syntax::Markdown, label, format!("failed to parse frontmatter: {e}")))?;

            let body = trim_blank_lines(body);
            if !body.is_empty() {
                doc.sections
                    .insert(CONTENT_SECTION.to_string(), Section::with_content(body).ordered(1));
            }
        }
        None => {
            doc.sections.insert(
                CONTENT_SECTION.to_string(),
                Section::with_content(trim_blank_lines(text)).ordered(1),
            );
            if doc.metadata.title.is_empty() {
                doc.metadata.title = UNTITLED_TITLE.to_string();
            }
        }
    }

    Ok(doc)
}

/// Split `text` into `(frontmatter, body)` when it opens with a delimiter line
/// that is closed by a second one. An unclosed block counts as no frontmatter.
fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FRONTMATTER_DELIMITER {
        return None;
    }

    let front_start = first.len();
    let mut offset = front_start;
    for line in lines {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            return Some((&text[front_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Copy recognized frontmatter keys onto `metadata`.
///
/// Only string values are taken for the text fields. A priority is taken only
/// when both a known `type` string and an integer `value` are present.
fn apply_frontmatter(metadata: &mut Metadata, frontmatter: &str) -> Result<(), serde_yaml::Error> {
    if frontmatter.trim().is_empty() {
        return Ok(());
    }
    let value: Value = serde_yaml::from_str(frontmatter)?;
    let Some(map) = value.as_mapping() else {
        return Ok(());
    };

    let fields = [
        ("title", &mut metadata.title),
        ("description", &mut metadata.description),
        ("version", &mut metadata.version),
        ("language", &mut metadata.language),
        ("extends", &mut metadata.extends),
    ];
    for (key, slot) in fields {
        if let Some(s) = map.get(key).and_then(Value::as_str) {
            *slot = s.to_string();
        }
    }

    if let Some(priority) = map.get("priority").and_then(Value::as_mapping) {
        let kind = priority.get("type").and_then(Value::as_str);
        let magnitude = priority.get("value").and_then(Value::as_i64);
        if let (Some(kind), Some(magnitude)) = (kind, magnitude) {
            match kind.parse::<PriorityKind>() {
                Ok(PriorityKind::Explicit) => metadata.priority = Priority::explicit(magnitude),
                Ok(PriorityKind::Relative) => metadata.priority = Priority::relative(magnitude),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Drop leading blank lines and all trailing whitespace.
fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    text[start..].trim_end()
}

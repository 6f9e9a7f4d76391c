use docmerge_types::Document;

use crate::error::{NormalizeError, NormalizeResult};

/// Reject documents that cannot be rendered meaningfully.
///
/// Checks, in order: a non-empty title, at least one section, and no section
/// carrying a tagged priority with a negative magnitude.
pub fn validate(doc: &Document) -> NormalizeResult<()> {
    let reject = |reason: String| NormalizeError::Validation {
        path: doc.source_label(),
        reason,
    };

    if doc.metadata.title.is_empty() {
        return Err(reject("missing title in metadata".into()));
    }

    if doc.sections.is_empty() {
        return Err(reject("document has no sections".into()));
    }

    if let Some((name, section)) = doc
        .sections
        .iter()
        .find(|(_, s)| s.priority.has_negative_magnitude())
    {
        return Err(reject(format!(
            "section {name} has invalid priority value: {}",
            section.priority
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use docmerge_types::{Priority, Provenance, Section, Syntax};

    use super::*;

    fn valid() -> Document {
        Document::new()
            .with_title("Test")
            .with_section("test", Section::with_content("content"))
    }

    #[test]
    fn accepts_valid_document() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn rejects_missing_title() {
        let doc = Document::new().with_section("test", Section::with_content("content"));
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn rejects_no_sections() {
        let err = validate(&Document::new().with_title("Test")).unwrap_err();
        assert!(err.to_string().contains("no sections"));
    }

    #[test]
    fn rejects_negative_priority() {
        let doc = valid().with_section(
            "bad",
            Section::with_content("c").prioritized(Priority::explicit(-1)),
        );
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().contains("section bad has invalid priority value: explicit(-1)"));
    }

    #[test]
    fn accepts_zero_priority() {
        let doc = valid().with_section(
            "zero",
            Section::with_content("c").prioritized(Priority::relative(0)),
        );
        assert!(validate(&doc).is_ok());
    }

    #[test]
    fn error_reports_provenance() {
        let mut doc = Document::new();
        doc.provenance = Some(Provenance::new(Some("rules/go.yaml".into()), Syntax::Yaml));
        match validate(&doc).unwrap_err() {
            NormalizeError::Validation { path, .. } => assert_eq!(path, "rules/go.yaml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

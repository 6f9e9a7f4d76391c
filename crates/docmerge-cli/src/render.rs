//! Output rendering for merged documents.

use docmerge_types::{Document, MergeStrategy, Section};
use tracing::warn;

/// Render `doc` as Markdown.
///
/// The title heading is skipped when the first section already opens with a
/// level-1 heading, which is the usual shape of merged prose.
pub fn render_markdown(doc: &Document) -> String {
    let mut sections: Vec<(&String, &Section)> = doc.sections.iter().collect();
    sections.sort_by(|(a_name, a), (b_name, b)| a.order.cmp(&b.order).then_with(|| a_name.cmp(b_name)));

    let opens_with_heading = sections
        .first()
        .is_some_and(|(_, s)| s.content.trim_start().starts_with("# "));

    let mut out = String::new();
    if !doc.metadata.title.is_empty() && !opens_with_heading {
        out.push_str(&format!("# {}\n\n", doc.metadata.title));
    }
    if !doc.metadata.description.is_empty() {
        out.push_str(&format!("{}\n\n", doc.metadata.description));
    }
    for (_, section) in sections {
        let content = resolve_merge_points(doc, section);
        if content.trim().is_empty() {
            continue;
        }
        out.push_str(content.trim_end());
        out.push_str("\n\n");
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

/// Render `doc` as pretty-printed JSON.
pub fn render_json(doc: &Document) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    Ok(json)
}

/// Substitute each merge point listed by `section` into its content.
fn resolve_merge_points(doc: &Document, section: &Section) -> String {
    let mut content = section.content.clone();
    for name in &section.merge_points {
        let Some(point) = doc.merge_points.get(name) else {
            continue;
        };
        if point.placeholder.is_empty() {
            continue;
        }
        let value = match doc.merge_targets.get(name) {
            Some(target) => {
                if !MergeStrategy::is_valid_tag(&target.strategy) {
                    warn!(merge_point = %name, strategy = %target.strategy, "unknown merge strategy, using replace");
                }
                target.strategy().apply(&point.default, &target.content)
            }
            None => point.default.clone(),
        };
        content = content.replace(&point.placeholder, &value);
    }
    content
}

#[cfg(test)]
mod tests {
    use docmerge_types::{MergePoint, MergeTarget, Priority};

    use super::*;

    fn point(placeholder: &str, default: &str) -> MergePoint {
        MergePoint {
            placeholder: placeholder.into(),
            default: default.into(),
            priority: Priority::None,
        }
    }

    fn target(strategy: &str, content: &str) -> MergeTarget {
        MergeTarget {
            strategy: strategy.into(),
            content: content.into(),
            priority: Priority::None,
        }
    }

    #[test]
    fn title_description_then_ordered_sections() {
        let mut doc = Document::new()
            .with_title("Guide")
            .with_section("zeta", Section::with_content("Z").ordered(1))
            .with_section("alpha", Section::with_content("A").ordered(1))
            .with_section("first", Section::with_content("F").ordered(0));
        doc.metadata.description = "About this guide.".into();

        assert_eq!(render_markdown(&doc), "# Guide\n\nAbout this guide.\n\nF\n\nA\n\nZ\n");
    }

    #[test]
    fn existing_heading_suppresses_title() {
        let doc = Document::new()
            .with_title("Untitled Document")
            .with_section("content", Section::with_content("# Real Title\n\nBody").ordered(1));
        assert_eq!(render_markdown(&doc), "# Real Title\n\nBody\n");
    }

    #[test]
    fn merge_point_uses_default_without_target() {
        let mut section = Section::with_content("before {{tools}} after");
        section.merge_points = vec!["tools".into()];
        let mut doc = Document::new().with_section("s", section);
        doc.merge_points.insert("tools".into(), point("{{tools}}", "cargo"));

        assert_eq!(render_markdown(&doc), "before cargo after\n");
    }

    #[test]
    fn merge_point_applies_target_strategy() {
        let mut section = Section::with_content("<!-- MERGE:tools -->");
        section.merge_points = vec!["tools".into()];
        let mut doc = Document::new().with_section("s", section);
        doc.merge_points.insert("tools".into(), point("<!-- MERGE:tools -->", "cargo"));
        doc.merge_targets.insert("tools".into(), target("append", "clippy"));
        assert_eq!(render_markdown(&doc), "cargo\nclippy\n");

        doc.merge_targets.insert("tools".into(), target("prepend", "rustfmt"));
        assert_eq!(render_markdown(&doc), "rustfmt\ncargo\n");

        doc.merge_targets.insert("tools".into(), target("bogus", "only"));
        assert_eq!(render_markdown(&doc), "only\n");
    }

    #[test]
    fn unlisted_placeholders_are_left_alone() {
        let section = Section::with_content("keep {{x}}");
        let mut doc = Document::new().with_section("s", section);
        doc.merge_points.insert("x".into(), point("{{x}}", "y"));
        assert_eq!(render_markdown(&doc), "keep {{x}}\n");
    }

    #[test]
    fn blank_sections_are_skipped() {
        let doc = Document::new()
            .with_title("T")
            .with_section("a", Section::with_content("   "))
            .with_section("b", Section::with_content("B"));
        assert_eq!(render_markdown(&doc), "# T\n\nB\n");
    }

    #[test]
    fn json_round_trips_model() {
        let doc = Document::new()
            .with_title("T")
            .with_section("s", Section::with_content("body").prioritized(Priority::explicit(2)));
        let json = render_json(&doc).unwrap();
        assert!(json.ends_with('\n'));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}

//! Placeholder marker scanning.
//!
//! A marker is an opening line `<name>` and a later closing tag `</name>` in
//! the same content. Names are lowercase and hyphenated, so ordinary HTML
//! such as `<details>` never counts as a marker. An opening tag mentioned
//! inside a sentence is plain text and is never replaced.

use std::sync::LazyLock;

use regex::Regex;

static OPEN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*<([a-z][a-z0-9]*(?:-[a-z0-9]+)+)>[ \t]*\r?$")
        .expect("open marker pattern is valid")
});

fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Names of every marker pair in `content`, in order of first appearance.
///
/// The opening tag must stand alone on its line, and the name must be
/// lowercase ASCII with at least one hyphen (`<test-cmds>`, not `<tests>`).
/// Unhyphenated tags are treated as HTML and ignored.
pub fn find_markers(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in OPEN_MARKER.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if names.iter().any(|n| n == name) {
            continue;
        }
        if content[whole.end()..].contains(&close_tag(name)) {
            names.push(name.to_string());
        }
    }
    names
}

/// Returns `true` if `content` holds at least one complete marker pair.
pub fn has_marker_pair(content: &str) -> bool {
    !find_markers(content).is_empty()
}

/// Replace every `<name>`..`</name>` span, tags included, with `replacement`.
///
/// Only opening tags that [`find_markers`] would recognize start a span. An
/// opening tag without a later closing tag is left untouched.
pub fn replace_marker_block(content: &str, name: &str, replacement: &str) -> String {
    let close = close_tag(name);
    let mut result = String::with_capacity(content.len());
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = OPEN_MARKER.captures_at(content, search_from) {
        let (Some(whole), Some(found)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        search_from = whole.end();
        if found.as_str() != name {
            continue;
        }
        let Some(close_offset) = content[whole.end()..].find(&close) else {
            break;
        };
        let end = whole.end() + close_offset + close.len();
        result.push_str(&content[copied..whole.start()]);
        result.push_str(replacement);
        copied = end;
        search_from = end;
    }

    result.push_str(&content[copied..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_paired_markers() {
        let content = "intro\n<test-cmds>\nplaceholder\n</test-cmds>\n\n  <doc-standards>\n</doc-standards>\n";
        assert_eq!(find_markers(content), vec!["test-cmds", "doc-standards"]);
        assert!(has_marker_pair(content));
    }

    #[test]
    fn unpaired_marker_is_ignored() {
        assert!(find_markers("<test-cmds>\nno closing tag\n").is_empty());
        assert!(find_markers("</test-cmds>\n<test-cmds>\n").is_empty());
    }

    #[test]
    fn plain_html_tags_are_not_markers() {
        let content = "<details>\nmore\n</details>\n";
        assert!(!has_marker_pair(content));
    }

    #[test]
    fn inline_tags_are_not_markers() {
        let content = "use <test-cmds> here </test-cmds>\n";
        assert!(!has_marker_pair(content));
    }

    #[test]
    fn duplicate_names_are_reported_once() {
        let content = "<a-b>\n</a-b>\n<a-b>\n</a-b>\n";
        assert_eq!(find_markers(content), vec!["a-b"]);
    }

    #[test]
    fn replaces_tags_and_inner_text() {
        let content = "before\n<test-cmds>\nold text\n</test-cmds>\nafter";
        assert_eq!(
            replace_marker_block(content, "test-cmds", "- one\n- two"),
            "before\n- one\n- two\nafter"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let content = "<x-y>\na\n</x-y>\nmid\n<x-y>\nb\n</x-y>";
        assert_eq!(replace_marker_block(content, "x-y", "R"), "R\nmid\nR");
    }

    #[test]
    fn empty_replacement_strips_block() {
        let content = "keep\n<x-y>\ndrop\n</x-y>\nkeep";
        assert_eq!(replace_marker_block(content, "x-y", ""), "keep\n\nkeep");
    }

    #[test]
    fn inline_mention_before_block_is_kept() {
        let content = "Intro: fill <test-cmds> blocks below.\nKEEP THIS LINE\n<test-cmds>\nold\n</test-cmds>\nend";
        assert_eq!(
            replace_marker_block(content, "test-cmds", "- go test"),
            "Intro: fill <test-cmds> blocks below.\nKEEP THIS LINE\n- go test\nend"
        );
    }

    #[test]
    fn other_marker_names_are_skipped() {
        let content = "<a-b>\nx\n</a-b>\n<c-d>\ny\n</c-d>";
        assert_eq!(replace_marker_block(content, "c-d", "R"), "<a-b>\nx\n</a-b>\nR");
    }

    #[test]
    fn indented_opening_tag_is_replaced_with_its_line() {
        let content = "a\n  <x-y>\nold\n</x-y>\nb";
        assert_eq!(replace_marker_block(content, "x-y", "R"), "a\nR\nb");
    }

    #[test]
    fn unclosed_block_is_untouched() {
        let content = "<x-y>\nnever closed";
        assert_eq!(replace_marker_block(content, "x-y", "R"), content);
    }
}

use crate::extractor::PlaceholderExtractor;

use super::non_blank;

const HEADING: &str = "Testing commands";

/// Stop collecting at a blank line once more than this many lines are held.
const MAX_LINES_BEFORE_BLANK: usize = 4;

/// Collects the non-blank lines following a "Testing commands" heading.
///
/// Collection ends at the next `#` heading that does not mention "Testing",
/// or at a blank line once more than four lines have been collected.
pub struct TestCommandsExtractor;

impl PlaceholderExtractor for TestCommandsExtractor {
    fn name(&self) -> &str {
        "test-commands"
    }

    fn marker_names(&self) -> &[&str] {
        &["test-cmds", "language-specific-test-commands-here"]
    }

    fn extract(&self, content: &str) -> Option<String> {
        let mut in_section = false;
        let mut lines = Vec::new();

        for line in content.lines() {
            if line.contains(HEADING) {
                in_section = true;
                continue;
            }
            if !in_section {
                continue;
            }
            if line.starts_with('#') && !line.contains("Testing") {
                break;
            }
            let blank = line.trim().is_empty();
            if blank && lines.len() > MAX_LINES_BEFORE_BLANK {
                break;
            }
            if !blank {
                lines.push(line);
            }
        }

        non_blank(&lines)
    }
}

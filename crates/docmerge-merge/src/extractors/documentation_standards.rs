use crate::extractor::PlaceholderExtractor;

use super::non_blank;

const HEADING: &str = "Documentation Standards";
const FENCE: &str = "```";

/// Collects the block following a "Documentation Standards" heading.
///
/// Collection ends with the line that closes the second code fence (kept), or
/// before the next `##` heading that does not mention "Documentation".
pub struct DocumentationStandardsExtractor;

impl PlaceholderExtractor for DocumentationStandardsExtractor {
    fn name(&self) -> &str {
        "documentation-standards"
    }

    fn marker_names(&self) -> &[&str] {
        &["doc-standards", "language-specific-documentation-standards"]
    }

    fn extract(&self, content: &str) -> Option<String> {
        let mut in_section = false;
        let mut fences = 0usize;
        let mut lines = Vec::new();

        for line in content.lines() {
            if line.contains(HEADING) {
                in_section = true;
                lines.push("");
                continue;
            }
            if !in_section {
                continue;
            }
            if line.starts_with(FENCE) {
                fences += 1;
                if fences >= 2 {
                    lines.push(line);
                    break;
                }
            }
            if line.starts_with("##") && !line.contains("Documentation") {
                break;
            }
            lines.push(line);
        }

        non_blank(&lines).map(|text| text.trim().to_string())
    }
}

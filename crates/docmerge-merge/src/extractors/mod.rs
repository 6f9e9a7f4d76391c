//! Built-in placeholder extractors.
//!
//! Both key on exact heading phrases and never guess at other headings.

pub mod documentation_standards;
pub mod test_commands;

pub use documentation_standards::DocumentationStandardsExtractor;
pub use test_commands::TestCommandsExtractor;

/// Join collected lines, treating all-blank output as nothing found.
fn non_blank(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

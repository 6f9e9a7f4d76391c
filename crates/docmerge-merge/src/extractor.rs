//! The placeholder extractor seam.

/// A named heuristic that locates replacement text for template placeholders.
///
/// Extractors run in order over the section content of every non-template
/// document. The trait is object-safe and `Send + Sync` so extractors can be
/// stored in a `Vec<Box<dyn PlaceholderExtractor>>`.
pub trait PlaceholderExtractor: Send + Sync {
    /// Key under which extracted text is recorded (e.g., "test-commands").
    fn name(&self) -> &str;

    /// Placeholder names, besides [`Self::name`], this extractor fills.
    fn marker_names(&self) -> &[&str];

    /// Extract replacement text from `content`, or `None` if nothing usable
    /// was found.
    fn extract(&self, content: &str) -> Option<String>;

    /// Returns `true` if this extractor supplies text for marker `name`.
    fn fills(&self, name: &str) -> bool {
        self.name() == name || self.marker_names().contains(&name)
    }
}

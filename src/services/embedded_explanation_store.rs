//! Embedded explanation document store.

use include_dir::{Dir, include_dir};

use crate::domain::Category;
use crate::ports::ExplanationStore;

static EXPLANATIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/explanations");

/// Explanation documents compiled into the binary.
///
/// Known categories resolve to their own document; anything else falls
/// back to the generic one. A document that is somehow absent from the
/// embedded set yields an empty string rather than aborting the run.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedExplanationStore;

impl EmbeddedExplanationStore {
    pub fn new() -> Self {
        Self
    }
}

impl ExplanationStore for EmbeddedExplanationStore {
    fn load(&self, category: &Category) -> String {
        let file_name = match category.slug() {
            Some(slug) => format!("{}.md", slug),
            None => "general.md".to_string(),
        };
        EXPLANATIONS_DIR
            .get_file(&file_name)
            .and_then(|file| file.contents_utf8())
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_category_has_an_embedded_document() {
        let store = EmbeddedExplanationStore::new();
        for category in &Category::KNOWN {
            let text = store.load(category);
            assert!(!text.is_empty(), "no document for {category}");
        }
    }

    #[test]
    fn unknown_category_uses_generic_document() {
        let store = EmbeddedExplanationStore::new();
        let text = store.load(&Category::Other("Brand Awareness".to_string()));
        assert!(!text.is_empty());
    }
}

//! Explanation document store port definition.

use crate::domain::Category;

/// Port for fetching the per-category explanation document embedded into
/// the system prompt.
///
/// Content is opaque to the core and passed through verbatim. A missing
/// document yields an empty string; it never aborts the pipeline.
pub trait ExplanationStore {
    fn load(&self, category: &Category) -> String;
}

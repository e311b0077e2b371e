//! Filesystem explanation document store.

use std::fs;
use std::path::PathBuf;

use crate::domain::Category;
use crate::ports::ExplanationStore;

/// Explanation documents read from a directory of markdown files, one per
/// category slug (`customer_acquisition.md`, ...), with `general.md` for
/// unrecognized categories.
///
/// A missing or unreadable file yields an empty string; the pipeline
/// proceeds with a prompt that simply lacks the explanation section.
#[derive(Debug, Clone)]
pub struct FilesystemExplanationStore {
    dir: PathBuf,
}

impl FilesystemExplanationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExplanationStore for FilesystemExplanationStore {
    fn load(&self, category: &Category) -> String {
        let file_name = match category.slug() {
            Some(slug) => format!("{}.md", slug),
            None => "general.md".to_string(),
        };
        fs::read_to_string(self.dir.join(file_name)).unwrap_or_default()
    }
}

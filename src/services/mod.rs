mod completion_client_http;
mod dataset_csv;
mod embedded_explanation_store;
mod explanation_filesystem;
mod prompt_builder;

pub use completion_client_http::HttpCompletionClient;
pub use dataset_csv::load_dataset;
pub use embedded_explanation_store::EmbeddedExplanationStore;
pub use explanation_filesystem::FilesystemExplanationStore;
pub use prompt_builder::{build_system_prompt, build_user_prompt};

mod completion_client;
mod explanation_store;

pub use completion_client::{CompletionClient, get_completion};
#[cfg(test)]
pub use completion_client::MockCompletionClient;
pub use explanation_store::ExplanationStore;

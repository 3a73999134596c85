use std::sync::Arc;

use crate::completion::client::CompletionClient;
use crate::completion::interface::CompletionInterface;
use crate::config::Config;
use crate::db::{PgTranslationStore, TranslationStore};

/// Process-wide dependencies, constructed once in main and cloned into
/// every request.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionInterface>,
    pub store: Arc<dyn TranslationStore>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let completion = Arc::new(CompletionClient::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
        ));
        let store = Arc::new(PgTranslationStore::connect(&config.database_url)?);

        Ok(Self { completion, store })
    }
}

//! Application state wiring all collaborators together.
//!
//! AppState holds the actor registry used by the HTTP handlers. Core is
//! generic over store/provider traits, but AppState pins them to the
//! concrete infra implementations.

use std::sync::Arc;

use secrecy::SecretString;

use clarity_core::conversation::registry::ActorRegistry;
use clarity_infra::llm::workers_ai::WorkersAiProvider;
use clarity_infra::sqlite::conversation::SqliteConversationStore;
use clarity_infra::sqlite::pool::DatabasePool;
use clarity_types::config::GlobalConfig;

/// Concrete registry type pinned to the infra implementations.
pub type ConcreteRegistry = ActorRegistry<SqliteConversationStore, WorkersAiProvider>;

/// Shared application state held by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ConcreteRegistry>,
}

impl AppState {
    /// Initialize the application state: connect to the DB, build the
    /// inference client, wire the registry.
    pub async fn init(config: &GlobalConfig, api_token: SecretString) -> anyhow::Result<Self> {
        let data_dir = clarity_infra::config::resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("clarity.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let store = SqliteConversationStore::new(db_pool);

        let account_id = config
            .inference
            .account_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("inference.account_id is not configured"))?;
        let mut provider = WorkersAiProvider::new(
            api_token,
            account_id,
            config.inference.model.clone(),
        );
        if let Some(base_url) = &config.inference.base_url {
            provider = provider.with_base_url(base_url.clone());
        }

        let registry = ActorRegistry::new(
            Arc::new(store),
            Arc::new(provider),
            config.inference.max_tokens,
        );

        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}

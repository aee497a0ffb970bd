use tracing::debug;

use super::config::AppConfig;
use crate::adapters::{EmbeddedTopicAssets, FilesystemTopicAssets};
use crate::domain::{AppError, TopicRegistry, UserState, populate_topics};

/// Application context holding the loaded registry and configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    registry: TopicRegistry,
    config: AppConfig,
}

impl AppContext {
    pub fn new(registry: TopicRegistry, config: AppConfig) -> Self {
        Self { registry, config }
    }

    /// Build the registry from the library named by `config`.
    pub fn load(config: AppConfig) -> Result<Self, AppError> {
        let registry = match &config.prompts_dir {
            Some(dir) => TopicRegistry::load(&FilesystemTopicAssets::new(dir))?,
            None => TopicRegistry::load(&EmbeddedTopicAssets::new())?,
        };
        debug!(topics = registry.len(), "topic registry ready");
        Ok(Self::new(registry, config))
    }

    pub fn registry(&self) -> &TopicRegistry {
        &self.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fresh UI state populated with every topic and configured paging.
    pub fn user_state(&self) -> UserState {
        let mut state = UserState::with_paging(
            self.config.default_topic_count,
            self.config.topic_count_increment,
        );
        populate_topics(&mut state, &self.registry);
        state
    }
}

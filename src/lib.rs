//! promptdeck: assemble LLM prompts from curated topic guideline libraries.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::{EmbeddedTopicAssets, FilesystemTopicAssets};

pub use app::AppContext;
pub use app::commands::list::{TopicListing, TopicSummary};
pub use app::commands::show::TopicDetail;
pub use app::config::AppConfig;
pub use domain::{
    AppError, GuidelineTextStore, RawTopicAssets, TopicRecord, TopicRegistry, TopicSelection,
    UserState, combine_guidelines, generate_prompt, populate_topics,
};
pub use ports::TopicAssetSource;

// =============================================================================
// Registry API
// =============================================================================

/// Load the topic library bundled with promptdeck.
pub fn embedded_registry() -> Result<TopicRegistry, AppError> {
    TopicRegistry::load(&EmbeddedTopicAssets::new())
}

/// Load a topic library laid out as `{dir}/{topic}/config.json|logo.svg|*.md`.
pub fn registry_from_dir(dir: &Path) -> Result<TopicRegistry, AppError> {
    TopicRegistry::load(&FilesystemTopicAssets::new(dir))
}

// =============================================================================
// Command API
// =============================================================================

/// List topics matching `query`, paged unless `all` is set.
pub fn list_topics(ctx: &AppContext, query: Option<&str>, all: bool) -> TopicListing {
    app::commands::list::execute(ctx, query, all)
}

/// Describe one topic and its combined guidelines.
pub fn show_topic(ctx: &AppContext, topic_id: &str) -> Result<TopicDetail, AppError> {
    app::commands::show::execute(ctx, topic_id)
}

/// Generate the prompt for `topic_ids` (in order) and `task`.
///
/// Fails only when `topic_ids` is empty.
pub fn generate(ctx: &AppContext, topic_ids: &[String], task: &str) -> Result<String, AppError> {
    app::commands::generate::execute(ctx, topic_ids, task)
}

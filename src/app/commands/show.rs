//! Show command - details and combined guidelines of one topic.

use crate::app::AppContext;
use crate::domain::{AppError, combine_guidelines};

/// Detailed information for a topic.
#[derive(Debug, Clone)]
pub struct TopicDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Configured prompt files with whether each resolves to text.
    pub prompt_files: Vec<(String, bool)>,
    pub has_logo: bool,
    pub guidelines: String,
}

/// Execute the show command.
pub fn execute(ctx: &AppContext, topic_id: &str) -> Result<TopicDetail, AppError> {
    let registry = ctx.registry();
    let topic =
        registry.topic(topic_id).ok_or_else(|| AppError::TopicNotFound(topic_id.to_string()))?;

    Ok(TopicDetail {
        id: topic.id().to_string(),
        name: topic.name.clone(),
        description: topic.description.clone(),
        keywords: topic.keywords.clone(),
        prompt_files: topic
            .prompt_files
            .iter()
            .map(|file| (file.clone(), registry.guideline(topic_id, file).is_some()))
            .collect(),
        has_logo: topic.logo.is_some(),
        guidelines: combine_guidelines(registry, topic_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::AppConfig;

    #[test]
    fn shows_embedded_topic() {
        let ctx = AppContext::load(AppConfig::default()).unwrap();
        let detail = execute(&ctx, "svelte").unwrap();

        assert_eq!(detail.name, "Svelte");
        assert!(detail.has_logo);
        assert!(detail.prompt_files.iter().all(|(_, found)| *found));
        assert!(detail.guidelines.starts_with("# Svelte 5 Core Rules"));
    }

    #[test]
    fn unknown_topic_is_not_found() {
        let ctx = AppContext::load(AppConfig::default()).unwrap();
        let result = execute(&ctx, "cobol");
        assert!(matches!(result, Err(AppError::TopicNotFound(id)) if id == "cobol"));
    }
}

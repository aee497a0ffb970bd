//! Prompt assembly over the topic registry.
//!
//! Assembly never fails: unknown topics and missing guideline files degrade
//! to a less specific prompt instead of an error.

use crate::domain::TopicRegistry;

use super::selection::TopicSelection;

/// Separator placed between guideline files of one topic.
pub const GUIDELINE_SEPARATOR: &str = "\n\n---\n\n";

/// Separator between topic names in the multi-topic context line.
const CONTEXT_SEPARATOR: &str = " + ";

/// Separator between per-topic guideline blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Concatenate a topic's guideline files in configured order.
///
/// Files missing from the registry or with empty text are skipped. Returns an empty string for
/// unknown topics or topics without any resolvable file.
pub fn combine_guidelines(registry: &TopicRegistry, topic_id: &str) -> String {
    let Some(topic) = registry.topic(topic_id) else {
        return String::new();
    };

    topic
        .prompt_files
        .iter()
        .filter_map(|file| registry.guideline(topic_id, file))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(GUIDELINE_SEPARATOR)
}

/// Build the final prompt for `selection` and the user's task text.
pub fn generate_prompt(
    registry: &TopicRegistry,
    selection: &TopicSelection,
    task: &str,
) -> String {
    match selection.ids() {
        [topic_id] => single_topic_prompt(registry, topic_id, task),
        topic_ids => multi_topic_prompt(registry, topic_ids, task),
    }
}

fn single_topic_prompt(registry: &TopicRegistry, topic_id: &str, task: &str) -> String {
    let Some(topic) = registry.topic(topic_id) else {
        return fallback_prompt(topic_id, task);
    };

    let combined = combine_guidelines(registry, topic_id);
    if combined.is_empty() {
        return fallback_prompt(&topic.name, task);
    }

    format!(
        "{combined}\n\nContext: Working on a {name} project\nTask: {task}\n\nPlease provide a complete, production-ready solution following the guidelines above.",
        name = topic.name
    )
}

fn fallback_prompt(label: &str, task: &str) -> String {
    format!(
        "Context: {label} project\nTask: {task}\n\nPlease provide a detailed, production-ready solution with best practices and clear explanations."
    )
}

fn multi_topic_prompt(registry: &TopicRegistry, topic_ids: &[String], task: &str) -> String {
    let combined_context = topic_ids
        .iter()
        .map(|id| {
            registry
                .topic(id)
                .filter(|topic| !topic.name.is_empty())
                .map_or(id.as_str(), |topic| topic.name.as_str())
        })
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR);

    let specific_requirements = topic_ids
        .iter()
        .filter_map(|id| {
            let topic = registry.topic(id)?;
            let guidelines = combine_guidelines(registry, id);
            if guidelines.is_empty() {
                None
            } else {
                Some(format!("## {} Guidelines\n{}", topic.name, guidelines))
            }
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);

    format!(
        r#"You are an expert developer with deep knowledge across multiple domains: {combined_context}.

{specific_requirements}

Context: Working on a project that combines {combined_context}
Task: {task}

Please provide a comprehensive solution that addresses all aspects:

General requirements:
- Ensure seamless integration between different technologies/domains
- Follow best practices for each area while maintaining overall coherence
- Consider how different aspects influence each other
- Provide clear explanations for cross-domain decisions
- Include proper error handling and validation across all areas
- Consider scalability and maintainability for the combined solution

Focus on creating a cohesive solution that leverages the strengths of each domain while addressing potential integration challenges."#
    )
}

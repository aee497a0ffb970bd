//! Caller-owned UI state: search, selection, paging and the last generated prompt.

use super::error::AppError;
use super::prompt::{TopicSelection, generate_prompt};
use super::registry::TopicRegistry;
use super::topic::TopicRecord;

/// Topics shown before the first "show more".
pub const DEFAULT_TOPIC_COUNT: usize = 6;
/// Topics added by each "show more".
pub const TOPIC_COUNT_INCREMENT: usize = 6;

/// Plain state record owned by the front end and passed into the core.
#[derive(Debug, Clone)]
pub struct UserState {
    pub search_query: String,
    /// Task text typed by the user.
    pub input: String,
    /// Last generated prompt.
    pub output: String,
    pub topics: Vec<TopicRecord>,
    pub selected_topics: Vec<TopicRecord>,
    pub filtered_topics: Vec<TopicRecord>,
    pub default_topic_count: usize,
    pub topic_count_increment: usize,
    pub visible_topic_count: usize,
    pub prompt_copied: bool,
}

impl Default for UserState {
    fn default() -> Self {
        Self::with_paging(DEFAULT_TOPIC_COUNT, TOPIC_COUNT_INCREMENT)
    }
}

impl UserState {
    /// Empty state with custom paging sizes.
    pub fn with_paging(default_topic_count: usize, topic_count_increment: usize) -> Self {
        Self {
            search_query: String::new(),
            input: String::new(),
            output: String::new(),
            topics: Vec::new(),
            selected_topics: Vec::new(),
            filtered_topics: Vec::new(),
            default_topic_count,
            topic_count_increment,
            visible_topic_count: default_topic_count,
            prompt_copied: false,
        }
    }

    /// Filter `topics` by `query` against name, description and keywords.
    ///
    /// Paging restarts from `default_topic_count`.
    pub fn apply_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        let needle = query.trim().to_lowercase();
        self.filtered_topics = if needle.is_empty() {
            self.topics.clone()
        } else {
            self.topics.iter().filter(|topic| topic.matches_lowercase(&needle)).cloned().collect()
        };
        self.visible_topic_count = self.default_topic_count;
    }

    pub fn visible_topics(&self) -> &[TopicRecord] {
        let end = self.visible_topic_count.min(self.filtered_topics.len());
        &self.filtered_topics[..end]
    }

    pub fn has_more(&self) -> bool {
        self.visible_topic_count < self.filtered_topics.len()
    }

    pub fn show_more(&mut self) {
        self.visible_topic_count =
            self.visible_topic_count.saturating_add(self.topic_count_increment);
    }

    /// Select the topic if unselected, otherwise deselect it.
    ///
    /// Returns `false` when `topic_id` is not among `topics`.
    pub fn toggle_topic(&mut self, topic_id: &str) -> bool {
        if let Some(index) = self.selected_topics.iter().position(|topic| topic.id() == topic_id) {
            self.selected_topics.remove(index);
            return true;
        }

        match self.topics.iter().find(|topic| topic.id() == topic_id) {
            Some(topic) => {
                self.selected_topics.push(topic.clone());
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, topic_id: &str) -> bool {
        self.selected_topics.iter().any(|topic| topic.id() == topic_id)
    }

    /// Generate a prompt for the selected topics and `input` into `output`.
    pub fn generate(&mut self, registry: &TopicRegistry) -> Result<&str, AppError> {
        let selection =
            TopicSelection::many(self.selected_topics.iter().map(|topic| topic.id().to_string()))
                .ok_or(AppError::NoTopicsSelected)?;

        self.output = generate_prompt(registry, &selection, &self.input);
        self.prompt_copied = false;
        Ok(&self.output)
    }
}

/// Overwrite `topics` and `filtered_topics` with every registry topic.
pub fn populate_topics(state: &mut UserState, registry: &TopicRegistry) {
    let topics: Vec<TopicRecord> = registry.topics().into_iter().cloned().collect();
    state.filtered_topics = topics.clone();
    state.topics = topics;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawTopicAssets;

    fn registry(count: usize) -> TopicRegistry {
        let mut raw = RawTopicAssets::default();
        for i in 0..count {
            raw.configs.insert(
                format!("./prompts/topic{i:02}/config.json"),
                format!(
                    r#"{{"name":"Topic {i}","description":"number {i}","keywords":["k{i}"],"promptFiles":["main.md"]}}"#
                ),
            );
            raw.guidelines.insert(format!("./prompts/topic{i:02}/main.md"), format!("G{i}"));
        }
        TopicRegistry::build(raw).unwrap()
    }

    fn populated(count: usize) -> (TopicRegistry, UserState) {
        let registry = registry(count);
        let mut state = UserState::default();
        populate_topics(&mut state, &registry);
        (registry, state)
    }

    #[test]
    fn populate_sets_topics_and_filtered_topics() {
        let (registry, state) = populated(3);
        assert_eq!(state.topics.len(), registry.len());
        assert_eq!(state.topics, state.filtered_topics);
    }

    #[test]
    fn populate_overwrites_previous_lists() {
        let (registry, mut state) = populated(2);
        state.filtered_topics.clear();
        state.topics.push(state.topics[0].clone());

        populate_topics(&mut state, &registry);
        assert_eq!(state.topics.len(), 2);
        assert_eq!(state.filtered_topics.len(), 2);
    }

    #[test]
    fn search_matches_keywords_and_resets_paging() {
        let (_, mut state) = populated(10);
        state.show_more();

        state.apply_search("  K3 ");
        let ids: Vec<_> = state.filtered_topics.iter().map(|topic| topic.id()).collect();
        assert_eq!(ids, vec!["topic03"]);
        assert_eq!(state.visible_topic_count, DEFAULT_TOPIC_COUNT);

        state.apply_search("");
        assert_eq!(state.filtered_topics.len(), 10);
    }

    #[test]
    fn paging_reveals_topics_in_increments() {
        let (_, mut state) = populated(10);
        assert_eq!(state.visible_topics().len(), 6);
        assert!(state.has_more());

        state.show_more();
        assert_eq!(state.visible_topics().len(), 10);
        assert!(!state.has_more());
    }

    #[test]
    fn show_more_saturates_on_huge_increment() {
        let mut state = UserState::with_paging(6, usize::MAX);
        state.show_more();
        state.show_more();
        assert_eq!(state.visible_topic_count, usize::MAX);
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let (_, mut state) = populated(3);
        assert!(state.toggle_topic("topic02"));
        assert!(state.toggle_topic("topic00"));
        assert!(!state.toggle_topic("missing"));

        let ids: Vec<_> = state.selected_topics.iter().map(|topic| topic.id()).collect();
        assert_eq!(ids, vec!["topic02", "topic00"]);

        assert!(state.toggle_topic("topic02"));
        assert!(!state.is_selected("topic02"));
    }

    #[test]
    fn generate_requires_a_selection() {
        let (registry, mut state) = populated(2);
        assert!(matches!(state.generate(&registry), Err(AppError::NoTopicsSelected)));
    }

    #[test]
    fn generate_writes_output_and_clears_copied_flag() {
        let (registry, mut state) = populated(2);
        state.toggle_topic("topic01");
        state.input = "ship it".to_string();
        state.prompt_copied = true;

        let prompt = state.generate(&registry).unwrap().to_string();
        assert!(prompt.starts_with("G1\n\nContext: Working on a Topic 1 project\nTask: ship it"));
        assert_eq!(state.output, prompt);
        assert!(!state.prompt_copied);
    }
}

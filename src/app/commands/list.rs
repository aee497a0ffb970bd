//! List command - topics filtered by a search query and paged.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::TopicRecord;

/// Summary information for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&TopicRecord> for TopicSummary {
    fn from(topic: &TopicRecord) -> Self {
        Self {
            id: topic.id().to_string(),
            name: topic.name.clone(),
            description: topic.description.clone(),
        }
    }
}

/// Result of the list command.
#[derive(Debug, Clone)]
pub struct TopicListing {
    pub topics: Vec<TopicSummary>,
    /// Matching topics left out by paging.
    pub hidden: usize,
}

/// Execute the list command.
///
/// Without `all`, only the first `default_topic_count` matches are returned.
pub fn execute(ctx: &AppContext, query: Option<&str>, all: bool) -> TopicListing {
    let mut state = ctx.user_state();
    state.apply_search(query.unwrap_or_default());

    if all {
        state.visible_topic_count = state.filtered_topics.len();
    }

    let topics: Vec<TopicSummary> =
        state.visible_topics().iter().map(TopicSummary::from).collect();
    let hidden = state.filtered_topics.len() - topics.len();
    debug!(shown = topics.len(), hidden, "listed topics");

    TopicListing { topics, hidden }
}

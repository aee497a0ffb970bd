/// One or more topic identifiers, in the order the user picked them.
///
/// A selection is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSelection {
    ids: Vec<String>,
}

impl TopicSelection {
    /// Selection of exactly one topic.
    pub fn single(topic_id: impl Into<String>) -> Self {
        Self { ids: vec![topic_id.into()] }
    }

    /// Selection of several topics; `None` when `topic_ids` is empty.
    pub fn many<I, S>(topic_ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = topic_ids.into_iter().map(Into::into).collect();
        if ids.is_empty() { None } else { Some(Self { ids }) }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<&str> for TopicSelection {
    fn from(topic_id: &str) -> Self {
        Self::single(topic_id)
    }
}

impl From<String> for TopicSelection {
    fn from(topic_id: String) -> Self {
        Self::single(topic_id)
    }
}

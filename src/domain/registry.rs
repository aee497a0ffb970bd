//! Topic registry: the immutable set of topics and their guideline texts.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::AppError;
use super::topic::{TopicConfig, TopicRecord};
use crate::ports::TopicAssetSource;

/// Segment index of the topic identifier in `./prompts/{topic}/{file}`.
const TOPIC_SEGMENT: usize = 2;
/// Segment index of the filename in `./prompts/{topic}/{file}`.
const FILE_SEGMENT: usize = 3;

/// Raw asset collections keyed by `./prompts/{topic}/{file}` paths.
#[derive(Debug, Clone, Default)]
pub struct RawTopicAssets {
    /// `config.json` contents.
    pub configs: BTreeMap<String, String>,
    /// `logo.svg` contents.
    pub logos: BTreeMap<String, String>,
    /// Markdown guideline contents.
    pub guidelines: BTreeMap<String, String>,
}

/// Guideline texts per topic, keyed by filename.
#[derive(Debug, Clone, Default)]
pub struct GuidelineTextStore {
    texts: BTreeMap<String, BTreeMap<String, String>>,
}

impl GuidelineTextStore {
    fn insert(&mut self, topic_id: &str, filename: &str, text: String) {
        self.texts.entry(topic_id.to_string()).or_default().insert(filename.to_string(), text);
    }

    /// Text of `filename` for `topic_id`, if present.
    pub fn get(&self, topic_id: &str, filename: &str) -> Option<&str> {
        self.texts.get(topic_id)?.get(filename).map(String::as_str)
    }

    /// Total number of guideline texts across all topics.
    pub fn len(&self) -> usize {
        self.texts.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only registry of topics, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TopicRegistry {
    topics: BTreeMap<String, TopicRecord>,
    guidelines: GuidelineTextStore,
}

impl TopicRegistry {
    /// Build the registry from raw asset collections.
    ///
    /// Configs are read first, then logos are attached to existing topics
    /// (logos without a topic are dropped), then guideline texts are stored.
    pub fn build(raw: RawTopicAssets) -> Result<Self, AppError> {
        let mut topics = BTreeMap::new();
        for (path, content) in &raw.configs {
            let topic_id = topic_id_from_path(path)?;
            let config = TopicConfig::from_json(content).map_err(|err| {
                AppError::InvalidTopicConfig { path: path.clone(), reason: err.to_string() }
            })?;
            topics.insert(topic_id.to_string(), TopicRecord::from_config(topic_id, config));
        }

        for (path, logo) in raw.logos {
            let topic_id = topic_id_from_path(&path)?;
            if let Some(record) = topics.get_mut(topic_id)
                && record.logo.is_none()
            {
                record.logo = Some(logo);
            }
        }

        let mut guidelines = GuidelineTextStore::default();
        for (path, text) in raw.guidelines {
            let (topic_id, filename) = guideline_key_from_path(&path)?;
            guidelines.insert(topic_id, filename, text);
        }

        debug!(topics = topics.len(), guidelines = guidelines.len(), "built topic registry");
        Ok(Self { topics, guidelines })
    }

    /// Load raw assets from `source` and build the registry.
    pub fn load<S: TopicAssetSource + ?Sized>(source: &S) -> Result<Self, AppError> {
        debug!(source = %source.describe(), "loading topic assets");
        Self::build(source.load()?)
    }

    pub fn topic(&self, topic_id: &str) -> Option<&TopicRecord> {
        self.topics.get(topic_id)
    }

    /// All topics, ordered by identifier.
    pub fn topics(&self) -> Vec<&TopicRecord> {
        self.topics.values().collect()
    }

    pub fn guideline(&self, topic_id: &str, filename: &str) -> Option<&str> {
        self.guidelines.get(topic_id, filename)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Extract the topic identifier from a `./prompts/{topic}/{file}` path.
pub fn topic_id_from_path(path: &str) -> Result<&str, AppError> {
    path.split('/')
        .nth(TOPIC_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AppError::InvalidAssetPath(path.to_string()))
}

fn guideline_key_from_path(path: &str) -> Result<(&str, &str), AppError> {
    let topic_id = topic_id_from_path(path)?;
    let filename = path
        .split('/')
        .nth(FILE_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AppError::InvalidAssetPath(path.to_string()))?;
    Ok((topic_id, filename))
}

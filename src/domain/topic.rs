//! Topic definitions as declared by a topic library's `config.json`.

use serde::Deserialize;

/// Raw shape of a topic `config.json` entry.
///
/// The `id` field is accepted for compatibility but never trusted: the
/// registry always assigns the identifier derived from the asset path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub prompt_files: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TopicConfig {
    /// Parse a configuration entry from JSON text.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// A topic known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Guideline filenames in concatenation order.
    pub prompt_files: Vec<String>,
    /// Raw SVG markup, if the topic ships one.
    pub logo: Option<String>,
}

impl TopicRecord {
    /// Build a record from its configuration, forcing the given identifier.
    pub fn from_config(id: impl Into<String>, config: TopicConfig) -> Self {
        Self {
            id: id.into(),
            name: config.name,
            description: config.description,
            keywords: config.keywords,
            prompt_files: config.prompt_files,
            logo: config.logo,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Case-insensitive match of `needle` against name, description and keywords.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.keywords.iter().any(|keyword| keyword.to_lowercase().contains(needle))
    }
}

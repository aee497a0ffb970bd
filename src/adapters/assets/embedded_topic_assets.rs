//! Topic library compiled into the binary.

use include_dir::{Dir, include_dir};

use super::{insert_topic_file, is_topic_file};
use crate::domain::{AppError, RawTopicAssets};
use crate::ports::TopicAssetSource;

/// Embedded topic library directory.
static PROMPTS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Topic assets bundled with promptdeck.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTopicAssets;

impl EmbeddedTopicAssets {
    pub fn new() -> Self {
        Self
    }
}

impl TopicAssetSource for EmbeddedTopicAssets {
    fn load(&self) -> Result<RawTopicAssets, AppError> {
        let mut raw = RawTopicAssets::default();

        for topic_dir in PROMPTS_DIR.dirs() {
            let Some(topic) = topic_dir.path().file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            for file in topic_dir.files() {
                let Some(name) = file.path().file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !is_topic_file(name) {
                    continue;
                }

                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::NonUtf8Asset(file.path().to_string_lossy().to_string())
                })?;
                insert_topic_file(&mut raw, topic, name, content.to_string());
            }
        }

        Ok(raw)
    }

    fn describe(&self) -> String {
        "embedded topic library".to_string()
    }
}

//! Topic library read from a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::{insert_topic_file, is_topic_file};
use crate::domain::{AppError, RawTopicAssets};
use crate::ports::TopicAssetSource;

/// Topic assets under `root/{topic}/{file}`.
#[derive(Debug, Clone)]
pub struct FilesystemTopicAssets {
    root: PathBuf,
}

impl FilesystemTopicAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TopicAssetSource for FilesystemTopicAssets {
    fn load(&self) -> Result<RawTopicAssets, AppError> {
        if !self.root.is_dir() {
            return Err(AppError::config_error(format!(
                "Prompts directory not found: {}",
                self.root.display()
            )));
        }

        let mut raw = RawTopicAssets::default();
        for topic_entry in fs::read_dir(&self.root)? {
            let topic_entry = topic_entry?;
            if !topic_entry.file_type()?.is_dir() {
                continue;
            }
            let Some(topic) = topic_entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            for file_entry in fs::read_dir(topic_entry.path())? {
                let file_entry = file_entry?;
                if !file_entry.file_type()?.is_file() {
                    continue;
                }
                let Some(name) = file_entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                if !is_topic_file(&name) {
                    continue;
                }

                let path = file_entry.path();
                let content = String::from_utf8(fs::read(&path)?)
                    .map_err(|_| AppError::NonUtf8Asset(path.display().to_string()))?;
                insert_topic_file(&mut raw, &topic, &name, content);
            }
        }

        Ok(raw)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

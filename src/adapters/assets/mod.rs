//! Topic asset sources.

pub mod embedded_topic_assets;
pub mod filesystem_topic_assets;

use crate::domain::RawTopicAssets;

const CONFIG_FILE: &str = "config.json";
const LOGO_FILE: &str = "logo.svg";
const GUIDELINE_EXTENSION: &str = ".md";

/// Key an asset the way the registry expects: `./prompts/{topic}/{file}`.
fn asset_key(topic: &str, file: &str) -> String {
    format!("./prompts/{}/{}", topic, file)
}

/// Whether `file` is one of the files a topic directory contributes.
fn is_topic_file(file: &str) -> bool {
    file == CONFIG_FILE || file == LOGO_FILE || file.ends_with(GUIDELINE_EXTENSION)
}

/// Route one topic file into the matching raw collection.
fn insert_topic_file(raw: &mut RawTopicAssets, topic: &str, file: &str, content: String) {
    let key = asset_key(topic, file);
    match file {
        CONFIG_FILE => {
            raw.configs.insert(key, content);
        }
        LOGO_FILE => {
            raw.logos.insert(key, content);
        }
        _ if file.ends_with(GUIDELINE_EXTENSION) => {
            raw.guidelines.insert(key, content);
        }
        _ => {}
    }
}

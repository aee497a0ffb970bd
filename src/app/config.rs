//! Application configuration loaded from `promptdeck.toml`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::AppError;
use crate::domain::user_state::{DEFAULT_TOPIC_COUNT, TOPIC_COUNT_INCREMENT};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "promptdeck.toml";

/// Environment variable overriding `prompts_dir`.
pub const PROMPTS_DIR_ENV: &str = "PROMPTDECK_PROMPTS_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Topic library on disk; the embedded library is used when unset.
    pub prompts_dir: Option<PathBuf>,
    pub default_topic_count: usize,
    pub topic_count_increment: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompts_dir: None,
            default_topic_count: DEFAULT_TOPIC_COUNT,
            topic_count_increment: TOPIC_COUNT_INCREMENT,
        }
    }
}

impl AppConfig {
    /// Apply the `PROMPTDECK_PROMPTS_DIR` override, if set and non-empty.
    pub fn with_prompts_dir_override(mut self, value: Option<OsString>) -> Self {
        if let Some(dir) = value.filter(|dir| !dir.is_empty()) {
            self.prompts_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

/// Parse configuration from TOML text.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;

    if config.default_topic_count == 0 {
        return Err(AppError::config_error("default_topic_count must be greater than zero"));
    }
    if config.topic_count_increment == 0 {
        return Err(AppError::config_error("topic_count_increment must be greater than zero"));
    }

    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `promptdeck.toml` in `cwd` is
/// used when present and defaults otherwise. A relative `prompts_dir` is
/// resolved against the directory holding the config file.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = cwd.join(CONFIG_FILE);
            if !path.is_file() {
                debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading config");
    let mut config = parse_config_content(&fs::read_to_string(&path)?)?;

    if let Some(dir) = config.prompts_dir.take() {
        let base = path.parent().unwrap_or(cwd);
        config.prompts_dir = Some(if dir.is_absolute() { dir } else { base.join(dir) });
    }

    Ok(config)
}

//! Topic asset source port definition.

use crate::domain::{AppError, RawTopicAssets};

/// Port for reading a topic library's raw assets.
///
/// Implementations key every entry by `./prompts/{topic}/{file}` so the
/// registry can derive identifiers the same way regardless of origin.
pub trait TopicAssetSource {
    /// Read all configs, logos and guideline texts.
    fn load(&self) -> Result<RawTopicAssets, AppError>;

    /// Human-readable origin, used in diagnostics.
    fn describe(&self) -> String;
}

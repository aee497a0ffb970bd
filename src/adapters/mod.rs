pub mod assets;

pub use assets::embedded_topic_assets::EmbeddedTopicAssets;
pub use assets::filesystem_topic_assets::FilesystemTopicAssets;

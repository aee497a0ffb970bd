pub mod error;
pub mod prompt;
pub mod registry;
pub mod topic;
pub mod user_state;

pub use error::AppError;
pub use prompt::{GUIDELINE_SEPARATOR, TopicSelection, combine_guidelines, generate_prompt};
pub use registry::{GuidelineTextStore, RawTopicAssets, TopicRegistry, topic_id_from_path};
pub use topic::{TopicConfig, TopicRecord};
pub use user_state::{UserState, populate_topics};

mod topic_asset_source;

pub use topic_asset_source::TopicAssetSource;

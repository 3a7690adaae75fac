pub mod asset;
pub mod asset_constants;
pub mod config;

// 重新导出具体的类型
pub use asset::{AssetField, AssetRecord, UnknownAssetField};
pub use asset_constants::*;
pub use config::AppConfig;

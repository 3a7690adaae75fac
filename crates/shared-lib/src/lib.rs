//! 🔧 共享库模块
//!
//! 这个模块包含了在多个crate之间共享的通用代码，包括：
//! - 资产记录数据结构
//! - 程序配置
//! - 资产查询接口常量

pub mod models;

// 重新导出常用类型
pub use models::{
    AppConfig, AssetField, AssetRecord, UnknownAssetField,
    // 接口常量
    ASSET_ID_QUERY_PARAM, DEFAULT_ASSET_API_BASE_URL, DEFAULT_ASSET_API_PATH,
};

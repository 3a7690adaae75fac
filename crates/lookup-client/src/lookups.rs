//! 资产查询模块
//!
//! 这里定义资产查询的端口（trait）和HTTP实现

pub mod asset;
pub mod traits;

// 重新导出具体的类型
pub use asset::HttpAssetLookup;
pub use traits::AssetLookupTrait;

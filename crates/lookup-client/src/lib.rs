//! 资产查询模块
//!
//! 这个模块提供了资产服务的HTTP连接、查询、响应解析等功能

pub mod connection;
pub mod error;
pub mod lookups;

pub use connection::{initialize_http_client, resolve_endpoint};
pub use error::LookupError;
pub use lookups::{asset::HttpAssetLookup, traits::AssetLookupTrait};
pub use shared_lib::AssetRecord;

/// 资产查询结果类型
pub type LookupResult<T> = Result<T, LookupError>;

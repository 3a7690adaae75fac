//! 资产查询 trait 定义
//!
//! 这里定义了资产查询的抽象接口（端口）
//!
//! 与仓库层一样，所有查询 trait 都使用统一的约束 `Send + Sync + 'static`：
//!
//! - `Send + Sync`：查询实例会被包装到 `Arc` 中，在多个 tokio 任务间共享
//! - `'static`：查询通常通过 `tokio::spawn` 在后台执行，不能依赖短期引用
//!
//! ```rust,ignore
//! async fn lookup_in_background<L: AssetLookupTrait>(lookup: Arc<L>, code: String) {
//!     tokio::spawn(async move {
//!         let _ = lookup.fetch_asset(&code).await;
//!     });
//! }
//! ```
//!
//! 生产环境使用 [`crate::HttpAssetLookup`]，测试中可以替换为返回固定数据的实现。

pub mod asset;

// 重新导出
pub use asset::AssetLookupTrait;

//! 资产查询 trait 定义

use crate::LookupResult;
use shared_lib::AssetRecord;

/// 资产查询trait定义
///
/// 根据二维码内容查询资产信息
#[async_trait::async_trait]
pub trait AssetLookupTrait: Send + Sync + 'static {
    /// 根据二维码内容查询资产
    ///
    /// # 参数
    /// - `code`: 扫描得到的二维码内容，原样作为查询参数，不做任何本地校验（空字符串也会发送请求）
    ///
    /// # 返回值
    /// 返回资产记录 [`AssetRecord`]，任何失败都返回 [`crate::LookupError::LookupFailed`]
    async fn fetch_asset(&self, code: &str) -> LookupResult<AssetRecord>;
}

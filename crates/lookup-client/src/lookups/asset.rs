//! 资产查询
//!
//! 负责调用 `activos_auditoria.php` 接口并解析返回的资产信息

use crate::connection::{initialize_http_client, resolve_endpoint};
use crate::lookups::traits::AssetLookupTrait;
use crate::{LookupError, LookupResult};
use reqwest::Client;
use shared_lib::{AppConfig, AssetRecord, ASSET_ID_QUERY_PARAM};
use tracing::{debug, instrument, warn};
use url::Url;

/// 基于HTTP的资产查询
#[derive(Debug, Clone)]
pub struct HttpAssetLookup {
    client: Client,
    endpoint: Url,
}

impl HttpAssetLookup {
    /// 使用已有的HTTP客户端和接口地址创建查询实例
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// 根据程序配置创建查询实例（一站式函数）
    pub fn from_config(config: &AppConfig) -> LookupResult<Self> {
        Ok(Self::new(initialize_http_client()?, resolve_endpoint(config)?))
    }

    /// 资产查询接口地址
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request_asset(&self, code: &str) -> LookupResult<AssetRecord> {
        let record = self
            .client
            .get(self.endpoint.clone())
            .query(&[(ASSET_ID_QUERY_PARAM, code)])
            .send()
            .await?
            .error_for_status()?
            .json::<AssetRecord>()
            .await?;

        Ok(record)
    }
}

#[async_trait::async_trait]
impl AssetLookupTrait for HttpAssetLookup {
    /// 根据二维码内容查询资产
    ///
    /// 每次调用只发送一次GET请求：`GET {endpoint}?id={code}`
    ///
    /// # 错误处理
    ///
    /// 连接失败、非2xx状态码、响应不是合法的资产JSON，
    /// 都会返回 [`LookupError::LookupFailed`]，不做重试
    #[instrument(skip(self))]
    async fn fetch_asset(&self, code: &str) -> LookupResult<AssetRecord> {
        debug!("🔍 开始请求资产服务 - 接口: {}, id: {:?}", self.endpoint, code);

        match self.request_asset(code).await {
            Ok(record) => {
                debug!("✅ 资产数据接收成功: {:#?}", record);
                Ok(record)
            }
            Err(LookupError::LookupFailed(msg)) => {
                warn!("⚠️ 获取资产数据失败: {}", msg);
                Err(LookupError::LookupFailed(msg))
            }
        }
    }
}

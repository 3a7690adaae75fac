use crate::LookupResult;
use reqwest::Client;
use shared_lib::AppConfig;
use tracing::info;
use url::Url;

/// 创建访问资产服务的HTTP客户端
///
/// 使用reqwest默认配置：不设置请求超时，也没有重试，
/// 失败后由用户再次点击查询。
/// 注意：[`Client`]内部已经是一个`Arc`了，所以可以使用.clone()安全跨线程使用
pub fn initialize_http_client() -> LookupResult<Client> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    info!("🌐 HTTP客户端创建成功");

    Ok(client)
}

/// 根据配置拼接资产查询接口的完整地址
///
/// `http://192.168.66.32/activosqr/` + `activos_auditoria.php`
/// => `http://192.168.66.32/activosqr/activos_auditoria.php`
pub fn resolve_endpoint(config: &AppConfig) -> LookupResult<Url> {
    let base = Url::parse(&config.asset_api_base_url)?;
    Ok(base.join(&config.asset_api_path)?)
}

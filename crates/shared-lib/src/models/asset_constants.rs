//! 资产查询接口常量定义模块
//!
//! 统一管理资产服务端的地址、路径和参数名，
//! 确保客户端和配置使用的值保持一致。

/// 资产服务默认基础地址
///
/// 内网部署，只提供plain HTTP。
/// 可通过环境变量 `ASSET_API_BASE_URL` 覆盖
pub const DEFAULT_ASSET_API_BASE_URL: &str = "http://192.168.66.32/activosqr/";

/// 资产查询接口路径（相对于基础地址）
///
/// 可通过环境变量 `ASSET_API_PATH` 覆盖
pub const DEFAULT_ASSET_API_PATH: &str = "activos_auditoria.php";

/// 查询参数名，值为扫描得到的二维码内容
pub const ASSET_ID_QUERY_PARAM: &str = "id";

use crate::models::asset_constants::{DEFAULT_ASSET_API_BASE_URL, DEFAULT_ASSET_API_PATH};
use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

/// 程序配置
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// 资产服务基础地址，例如 `http://192.168.66.32/activosqr/`
    ///
    /// 统一以`/`结尾，保证和 [`AppConfig::asset_api_path`] 拼接时不会丢掉最后一级目录。
    /// 可通过环境变量 `ASSET_API_BASE_URL` 来调整
    #[validate(url)]
    pub asset_api_base_url: String,

    /// 资产查询接口路径
    ///
    /// 可通过环境变量 `ASSET_API_PATH` 来调整
    #[validate(length(min = 1, max = 255))]
    pub asset_api_path: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 扫描终端上一般没有.env文件，此时直接使用环境变量和默认值
        apply_env_file(dotenvy::dotenv())?;

        let config = AppConfig::new(
            std::env::var("ASSET_API_BASE_URL").unwrap_or_else(|_| DEFAULT_ASSET_API_BASE_URL.to_string()),
            std::env::var("ASSET_API_PATH").unwrap_or_else(|_| DEFAULT_ASSET_API_PATH.to_string()),
        )?;

        Ok(Arc::new(config))
    }

    /// 根据地址和路径创建配置，并进行校验
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Result<AppConfig> {
        let mut base_url = base_url.into().trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let config = AppConfig {
            asset_api_base_url: base_url,
            asset_api_path: path.into().trim().trim_start_matches('/').to_string(),
        };

        config
            .validate()
            .context("Invalid asset api configuration")
            .suggestion("检查 ASSET_API_BASE_URL / ASSET_API_PATH 环境变量")?;

        Ok(config)
    }
}

/// 处理.env文件的加载结果
///
/// 只有文件不存在时才忽略，文件存在但读取或解析失败必须报错，
/// 否则会悄悄回退到默认的生产地址
fn apply_env_file<T>(result: Result<T, dotenvy::Error>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => {
            debug!("未找到.env文件，使用环境变量和默认值");
            Ok(())
        }
        Err(err) => Err(err)
            .context("Load .env file")
            .suggestion("检查 .env 文件格式，每行应为 KEY=VALUE"),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            asset_api_base_url: DEFAULT_ASSET_API_BASE_URL.to_string(),
            asset_api_path: DEFAULT_ASSET_API_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.asset_api_base_url, "http://192.168.66.32/activosqr/");
        assert_eq!(config.asset_api_path, "activos_auditoria.php");
    }

    #[test]
    fn test_new_normalizes_slashes() {
        let config = AppConfig::new("http://10.0.0.5/activosqr", "/activos_auditoria.php").unwrap();
        assert_eq!(config.asset_api_base_url, "http://10.0.0.5/activosqr/");
        assert_eq!(config.asset_api_path, "activos_auditoria.php");
    }

    #[test]
    fn test_missing_env_file_is_tolerated() {
        let path = std::env::temp_dir().join(format!("asset-audit-missing-{}.env", std::process::id()));
        assert!(apply_env_file(dotenvy::from_path(&path)).is_ok());
    }

    #[test]
    fn test_broken_env_file_is_reported() {
        let path = std::env::temp_dir().join(format!("asset-audit-broken-{}.env", std::process::id()));
        std::fs::write(&path, "ASSET_API_BASE_URL http://10.0.0.5/activosqr/\n").unwrap();

        let result = apply_env_file(dotenvy::from_path(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_unreadable_env_file_is_reported() {
        // 目录可以打开但无法按行读取
        assert!(apply_env_file(dotenvy::from_path(std::env::temp_dir())).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_values() {
        assert!(AppConfig::new("not a url", "activos_auditoria.php").is_err());
        assert!(AppConfig::new("http://10.0.0.5/", "").is_err());
    }
}

use thiserror::Error;

/// 资产查询错误类型
///
/// 网络错误、非2xx响应、JSON解析失败统一归为 [`LookupError::LookupFailed`]，
/// 调用方只负责记录日志，不做区分处理。
/// 错误信息中保留了底层原因，仅用于日志排查。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// 查询失败
    #[error("资产查询失败: {0}")]
    LookupFailed(String),
}

impl LookupError {
    /// 创建查询失败错误
    pub fn failed<T: ToString>(msg: T) -> Self {
        Self::LookupFailed(msg.to_string())
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::failed(err)
    }
}

impl From<url::ParseError> for LookupError {
    fn from(err: url::ParseError) -> Self {
        Self::failed(format!("无效的接口地址: {err}"))
    }
}

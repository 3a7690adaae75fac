use chrono::{DateTime, Utc};
use shared_lib::AssetRecord;

/// 扫描结果状态
///
/// - `Idle`: 没有扫描结果，显示开始界面
/// - `ResultPending`: 已获取二维码内容，表单为空（或只有用户手动输入），等待用户触发查询
/// - `Populated`: 查询成功，表单已使用服务端数据填充
///
/// 每次成功扫描都会开启一个新的会话（`session`），查询结果只会写回到发起查询时的会话。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,

    ResultPending {
        session: u64,
        code: String,
        form: AssetRecord,
    },

    Populated {
        session: u64,
        code: String,
        form: AssetRecord,
        /// 最近一次查询成功的时间
        fetched_at: DateTime<Utc>,
    },
}

impl ScanState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ScanState::Idle)
    }

    /// 当前会话编号
    pub fn session(&self) -> Option<u64> {
        match self {
            ScanState::Idle => None,
            ScanState::ResultPending { session, .. } | ScanState::Populated { session, .. } => Some(*session),
        }
    }

    /// 当前扫描得到的二维码内容
    pub fn code(&self) -> Option<&str> {
        match self {
            ScanState::Idle => None,
            ScanState::ResultPending { code, .. } | ScanState::Populated { code, .. } => Some(code),
        }
    }

    /// 表单中显示的资产信息
    ///
    /// `Idle` 状态下没有表单，返回 `None`
    pub fn form(&self) -> Option<&AssetRecord> {
        match self {
            ScanState::Idle => None,
            ScanState::ResultPending { form, .. } | ScanState::Populated { form, .. } => Some(form),
        }
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut AssetRecord> {
        match self {
            ScanState::Idle => None,
            ScanState::ResultPending { form, .. } | ScanState::Populated { form, .. } => Some(form),
        }
    }
}

/// 一次查询的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 查询成功，表单已整体替换
    Applied,

    /// 查询失败，表单保持不变（失败原因只记录日志）
    Failed,

    /// 查询成功，但结果返回时会话已经结束（用户关闭了表单或重新扫描），结果被丢弃
    Stale,

    /// 当前没有扫描结果，不发起查询
    NoCode,
}

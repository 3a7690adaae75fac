//! 扫描结果处理器
//!
//! 状态转换：
//!
//! | 当前状态 | 事件 | 新状态 |
//! |---|---|---|
//! | 任意 | 扫描得到非空内容 | `ResultPending`（新会话，表单为空） |
//! | 任意 | 扫描取消 / 内容为空 | 不变 |
//! | `ResultPending` / `Populated` | 查询成功 | `Populated`（表单整体替换） |
//! | `ResultPending` / `Populated` | 查询失败 | 不变 |
//! | `ResultPending` / `Populated` | 用户修改字段 | 不变（只替换该字段） |
//! | 任意 | 关闭表单 | `Idle` |
//!
//! 多次查询互不排队也不取消，谁最后返回谁覆盖表单。
//! 状态通过 [`watch`] 通道整体发布，显示界面不会看到只更新了一半的表单。

use crate::scanner::ScanOptions;
use crate::state::{ScanState, SearchOutcome};
use crate::traits::ScannerTrait;
use chrono::Utc;
use lookup_client::AssetLookupTrait;
use shared_lib::AssetField;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

pub struct ScanResultHandler<L: AssetLookupTrait, S: ScannerTrait> {
    lookup: Arc<L>,
    scanner: S,
    scan_options: ScanOptions,
    state_tx: watch::Sender<ScanState>,
    next_session: AtomicU64,
}

impl<L: AssetLookupTrait, S: ScannerTrait> ScanResultHandler<L, S> {
    pub fn new(lookup: Arc<L>, scanner: S) -> Self {
        Self::with_scan_options(lookup, scanner, ScanOptions::default())
    }

    pub fn with_scan_options(lookup: Arc<L>, scanner: S, scan_options: ScanOptions) -> Self {
        let (state_tx, _) = watch::channel(ScanState::Idle);
        Self {
            lookup,
            scanner,
            scan_options,
            state_tx,
            next_session: AtomicU64::new(1),
        }
    }

    /// 订阅状态变化，供显示界面使用
    pub fn subscribe(&self) -> watch::Receiver<ScanState> {
        self.state_tx.subscribe()
    }

    /// 当前状态快照
    pub fn current(&self) -> ScanState {
        self.state_tx.borrow().clone()
    }

    pub fn scan_options(&self) -> &ScanOptions {
        &self.scan_options
    }

    /// 开启一次扫描会话并等待结果
    ///
    /// 扫描得到非空内容时开启新会话，丢弃之前的表单，返回 `true`。
    /// 取消扫描或内容为空时状态不变，返回 `false`。
    /// 扫描成功后不会自动查询，需要用户再调用 [`Self::search`]。
    #[instrument(skip(self))]
    pub async fn scan(&self) -> bool {
        let receiver = self.scanner.open_session(&self.scan_options);

        match receiver.await {
            Ok(code) if !code.is_empty() => {
                let session = self.next_session.fetch_add(1, Ordering::Relaxed);
                info!("📷 扫描成功 - 会话: {}, 内容: {:?}", session, code);
                self.state_tx.send_replace(ScanState::ResultPending {
                    session,
                    code,
                    form: Default::default(),
                });
                true
            }
            Ok(_) => {
                debug!("扫描结果为空，忽略");
                false
            }
            Err(_) => {
                debug!("扫描已取消");
                false
            }
        }
    }

    /// 使用当前二维码内容查询资产
    ///
    /// 查询成功时整体替换表单并切换到 `Populated`；失败时只记录日志，表单保持原样。
    /// 如果结果返回时会话已经结束，结果被丢弃。
    #[instrument(skip(self))]
    pub async fn search(&self) -> SearchOutcome {
        let (session, code) = {
            let state = self.state_tx.borrow();
            match (state.session(), state.code()) {
                (Some(session), Some(code)) => (session, code.to_string()),
                _ => {
                    debug!("没有扫描结果，忽略查询");
                    return SearchOutcome::NoCode;
                }
            }
        };

        info!("📡 开始向服务端查询资产 - 会话: {}, id: {:?}", session, code);

        let record = match self.lookup.fetch_asset(&code).await {
            Ok(record) => record,
            Err(err) => {
                warn!("❌ 获取资产数据失败，表单保持不变: {}", err);
                return SearchOutcome::Failed;
            }
        };

        let applied = self.state_tx.send_if_modified(|state| {
            if state.session() != Some(session) {
                return false;
            }

            *state = ScanState::Populated {
                session,
                code,
                form: record,
                fetched_at: Utc::now(),
            };
            true
        });

        if applied {
            info!("✅ 资产数据已填充 - 会话: {}", session);
            SearchOutcome::Applied
        } else {
            debug!("会话 {} 已结束，丢弃查询结果", session);
            SearchOutcome::Stale
        }
    }

    /// 修改表单中的单个字段（自由文本覆盖）
    ///
    /// `Idle` 状态下没有表单，返回 `false`
    pub fn edit_field(&self, field: AssetField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.state_tx.send_if_modified(move |state| match state.form_mut() {
            Some(form) => {
                *form = std::mem::take(form).with_field(field, value);
                true
            }
            None => false,
        })
    }

    /// 关闭表单（界面上的"编辑"按钮）
    ///
    /// 丢弃二维码内容和表单，回到 `Idle`，不会写回服务端
    pub fn dismiss(&self) {
        let previous = self.state_tx.send_replace(ScanState::Idle);
        if let Some(session) = previous.session() {
            debug!("🗑️ 关闭会话 {}", session);
        }
    }
}

impl<L: AssetLookupTrait, S: ScannerTrait> ScanResultHandler<L, S> {
    /// 在后台任务中执行查询，不阻塞调用方
    ///
    /// 多次调用会并发执行，互不取消
    pub fn spawn_search(self: &Arc<Self>) -> JoinHandle<SearchOutcome> {
        let handler = Arc::clone(self);
        tokio::spawn(async move { handler.search().await })
    }
}

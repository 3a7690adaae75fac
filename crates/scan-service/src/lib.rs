//! 扫描结果处理模块
//!
//! 这个模块负责连接外部扫描器、资产查询和显示界面：
//!
//! - 扫描器通过 [`ScannerTrait`] 注入，每次会话最多产出一个二维码内容
//! - [`ScanResultHandler`] 维护 `Idle → ResultPending → Populated` 状态机
//! - 显示界面通过 [`ScanResultHandler::subscribe`] 订阅状态变化，并用 [`render_form`] 渲染表单
//!
//! 扫描和查询是两个独立的步骤：扫描只确认资产身份，用户显式触发查询后才会访问网络。

pub mod display;
pub mod handler;
pub mod scanner;
pub mod state;
pub mod traits;

pub use display::render_form;
pub use handler::ScanResultHandler;
pub use scanner::{BarcodeFormat, ScanOptions};
pub use state::{ScanState, SearchOutcome};
pub use traits::ScannerTrait;

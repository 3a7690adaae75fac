use crate::scanner::ScanOptions;
use tokio::sync::oneshot;

/// 二维码扫描器特征
///
/// 扫描器（摄像头、扫码枪、终端输入……）是外部协作方，这里只关心它产出的字符串。
///
/// 每次调用 [`ScannerTrait::open_session`] 开启一次扫描会话：
/// - 会话最多产出一个解码结果，通过返回的 [`oneshot::Receiver`] 送达
/// - 用户取消扫描时，扫描器直接丢弃发送端即可，处理器会收到 `RecvError`
///
/// 由于扫描器需要被 [`crate::ScanResultHandler`] 持有并在多个协程中使用，因此需要实现线程安全的[`Send`]和[`Sync`]
pub trait ScannerTrait: Send + Sync + 'static {
    fn open_session(&self, options: &ScanOptions) -> oneshot::Receiver<String>;
}

//! 终端输入
//!
//! 命令行和扫描器共用同一个输入流：
//! 执行 `escanear`（`scan`）命令后，下一行输入被当作扫码枪/扫描应用产出的二维码内容。

use scan_service::{ScanOptions, ScannerTrait};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::{oneshot, Mutex};
use tracing::warn;

type BoxedReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// 多个协程共享的按行输入
#[derive(Clone)]
pub struct SharedInput {
    lines: Arc<Mutex<Lines<BoxedReader>>>,
}

impl SharedInput {
    pub fn new<R: AsyncBufRead + Send + Unpin + 'static>(reader: R) -> Self {
        let reader: BoxedReader = Box::new(reader);
        Self {
            lines: Arc::new(Mutex::new(reader.lines())),
        }
    }

    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }

    /// 读取下一行，输入结束时返回 `None`
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

/// 从终端读取二维码内容的扫描器
///
/// 空行或输入结束都视为取消扫描
pub struct PromptScanner {
    input: SharedInput,
}

impl PromptScanner {
    pub fn new(input: SharedInput) -> Self {
        Self { input }
    }
}

impl ScannerTrait for PromptScanner {
    fn open_session(&self, options: &ScanOptions) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();
        println!("{}", session_banner(options));

        let input = self.input.clone();
        let feedback = scan_feedback(options);
        tokio::spawn(async move {
            match input.next_line().await {
                Ok(Some(line)) => {
                    let code = line.trim().to_string();
                    if !code.is_empty() {
                        print!("{feedback}");
                        let _ = tx.send(code);
                    }
                }
                Ok(None) => {}
                Err(err) => warn!("⚠️ 读取扫描内容失败: {}", err),
            }
        });

        rx
    }
}

/// 扫描提示行，例如 `Escanear código QR [QR_CODE] cámara 0 >`
fn session_banner(options: &ScanOptions) -> String {
    let formats = options.formats.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(",");
    format!("{} [{}] cámara {} >", options.prompt, formats, options.camera_id)
}

/// 扫描成功时的反馈，终端上用响铃代替蜂鸣
fn scan_feedback(options: &ScanOptions) -> &'static str {
    if options.beep_enabled {
        "\x07"
    } else {
        ""
    }
}

//! 扫描参数

use std::fmt;

/// 扫描器支持识别的码制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    QrCode,
    DataMatrix,
    Code128,
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarcodeFormat::QrCode => "QR_CODE",
            BarcodeFormat::DataMatrix => "DATA_MATRIX",
            BarcodeFormat::Code128 => "CODE_128",
        };
        f.write_str(name)
    }
}

/// 开启扫描会话时传给扫描器的参数
///
/// 默认值与资产盘点终端保持一致：只识别二维码、使用0号摄像头、提示语为西语、扫描成功时蜂鸣。
/// 扫描器实现负责解释这些参数，终端扫描器会显示码制和摄像头编号，并用响铃代替蜂鸣
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// 需要识别的码制
    pub formats: Vec<BarcodeFormat>,

    /// 摄像头编号
    pub camera_id: u32,

    /// 扫描界面上的提示语
    pub prompt: String,

    /// 扫描成功是否蜂鸣
    pub beep_enabled: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            formats: vec![BarcodeFormat::QrCode],
            camera_id: 0,
            prompt: "Escanear código QR".to_string(),
            beep_enabled: true,
        }
    }
}

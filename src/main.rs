use color_eyre::eyre::Context;
use color_eyre::Result;
use lookup_client::HttpAssetLookup;
use scan_service::ScanResultHandler;
use shared_lib::AppConfig;
use std::sync::Arc;
use tracing::info;

use crate::input::{PromptScanner, SharedInput};

mod console;

mod input;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 表单输出到stdout，日志统一输出到stderr
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;

    let lookup = HttpAssetLookup::from_config(&config).context("Create asset lookup client")?;
    info!("🚀 资产盘点扫描终端启动，资产接口: {}", lookup.endpoint());

    let input = SharedInput::stdin();
    let handler = Arc::new(ScanResultHandler::new(
        Arc::new(lookup),
        PromptScanner::new(input.clone()),
    ));

    let renderer = tokio::spawn(console::render_on_change(handler.subscribe()));

    tokio::select! {
        result = console::run(Arc::clone(&handler), input) => result?,
        _ = tokio::signal::ctrl_c() => info!("🛑 收到退出信号"),
    }

    renderer.abort();

    Ok(())
}

//! 终端交互界面
//!
//! 对应手机端的三个操作：扫码按钮、查询按钮、编辑（关闭）按钮，
//! 另外支持逐个字段手动修改表单。

use crate::input::{PromptScanner, SharedInput};
use color_eyre::Result;
use lookup_client::AssetLookupTrait;
use scan_service::{render_form, ScanResultHandler, ScanState};
use shared_lib::{AssetField, UnknownAssetField};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch::Receiver;
use tracing::{debug, info};

pub type ConsoleHandler<L> = ScanResultHandler<L, PromptScanner>;

const HELP: &str = "\
comandos:
  escanear | scan               escanear un código QR (la siguiente línea es el contenido, línea vacía cancela)
  buscar | search               consultar el código escaneado en el servidor de activos
  set <campo> <valor>           sobrescribir un campo (modelo, serie, marca, nombre_del_activo, persona_asignada, cedula)
  editar | edit | dismiss       cerrar el formulario y descartar el resultado
  mostrar | show                mostrar el formulario actual
  ayuda | help                  mostrar esta ayuda
  salir | quit                  salir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan,
    Search,
    Set(AssetField, String),
    Dismiss,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("comando desconocido `{0}`, escriba `ayuda` para ver los comandos")]
    UnknownCommand(String),

    #[error("uso: set <campo> <valor>")]
    MissingField,

    #[error(transparent)]
    UnknownField(#[from] UnknownAssetField),
}

/// 解析一行输入，空行返回 `None`
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match name.to_ascii_lowercase().as_str() {
        "escanear" | "scan" => Command::Scan,
        "buscar" | "search" => Command::Search,
        "set" => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                return Err(CommandError::MissingField);
            }
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Set(field.parse()?, value.trim().to_string())
        }
        "editar" | "edit" | "dismiss" => Command::Dismiss,
        "mostrar" | "show" => Command::Show,
        "ayuda" | "help" => Command::Help,
        "salir" | "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// 运行交互循环，直到用户输入 `quit` 或输入结束
pub async fn run<L: AssetLookupTrait>(handler: Arc<ConsoleHandler<L>>, input: SharedInput) -> Result<()> {
    println!("{HELP}");
    print!("{}", render_form(&handler.current()));

    while let Some(line) = input.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        debug!("执行命令: {:?}", command);

        match command {
            Command::Scan => {
                if !handler.scan().await {
                    println!("escaneo cancelado");
                }
            }
            Command::Search => {
                handler.spawn_search();
            }
            Command::Set(field, value) => {
                if !handler.edit_field(field, value) {
                    println!("no hay código escaneado, escriba `escanear` primero");
                }
            }
            Command::Dismiss => handler.dismiss(),
            Command::Show => print!("{}", render_form(&handler.current())),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    info!("👋 退出交互界面");
    Ok(())
}

/// 状态变化时重新渲染表单
pub async fn render_on_change(mut state_rx: Receiver<ScanState>) {
    while state_rx.changed().await.is_ok() {
        let text = render_form(&state_rx.borrow_and_update());
        print!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_client::{LookupError, LookupResult};
    use shared_lib::AssetRecord;

    struct UnreachableLookup;

    #[async_trait::async_trait]
    impl AssetLookupTrait for UnreachableLookup {
        async fn fetch_asset(&self, _code: &str) -> LookupResult<AssetRecord> {
            Err(LookupError::failed("connection refused"))
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("scan"), Ok(Some(Command::Scan)));
        assert_eq!(parse_command("SEARCH"), Ok(Some(Command::Search)));
        assert_eq!(parse_command("edit"), Ok(Some(Command::Dismiss)));
        assert_eq!(parse_command("dismiss"), Ok(Some(Command::Dismiss)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("Escanear"), Ok(Some(Command::Scan)));
        assert_eq!(parse_command("buscar"), Ok(Some(Command::Search)));
        assert_eq!(parse_command("editar"), Ok(Some(Command::Dismiss)));
        assert_eq!(parse_command("salir"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_set_command() {
        assert_eq!(
            parse_command("set persona_asignada  Jane  Doe "),
            Ok(Some(Command::Set(AssetField::AssignedPerson, "Jane  Doe".to_string())))
        );
        assert_eq!(
            parse_command("set serial"),
            Ok(Some(Command::Set(AssetField::Serial, String::new())))
        );
        assert_eq!(parse_command("set"), Err(CommandError::MissingField));
        assert!(matches!(parse_command("set color red"), Err(CommandError::UnknownField(_))));
        assert!(matches!(parse_command("print"), Err(CommandError::UnknownCommand(_))));
    }

    #[tokio::test]
    async fn test_run_script() {
        let input = SharedInput::new(&b"scan\nACT-0001\nset marca Lenovo\nbogus\nquit\nscan\n"[..]);
        let handler = Arc::new(ScanResultHandler::new(
            Arc::new(UnreachableLookup),
            PromptScanner::new(input.clone()),
        ));

        run(Arc::clone(&handler), input.clone()).await.unwrap();

        let state = handler.current();
        assert_eq!(state.code(), Some("ACT-0001"));
        assert_eq!(state.form().unwrap().brand, "Lenovo");
        // quit之后的输入不会被消费
        assert_eq!(input.next_line().await.unwrap(), Some("scan".to_string()));
    }
}

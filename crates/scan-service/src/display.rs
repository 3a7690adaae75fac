//! 表单渲染
//!
//! 把 [`ScanState`] 渲染成纯文本，终端界面直接打印即可。
//! 标题和标签沿用盘点终端上的西语文案。

use crate::state::ScanState;
use shared_lib::AssetField;
use std::fmt::Write;

const LABEL_WIDTH: usize = 18;

pub fn render_form(state: &ScanState) -> String {
    let mut out = String::new();

    let (code, form) = match (state.code(), state.form()) {
        (Some(code), Some(form)) => (code, form),
        _ => {
            out.push_str("Escáner Auditoria QR\n");
            out.push_str("  [Escanear QR] escriba `escanear` para leer un código QR\n");
            return out;
        }
    };

    out.push_str("Resultado del Activo Escaneado\n");
    let _ = writeln!(out, "  {:<LABEL_WIDTH$}: {}", "Resultado", code);
    for field in AssetField::ALL {
        let _ = writeln!(out, "  {:<LABEL_WIDTH$}: {}", field, form.get(field));
    }

    match state {
        ScanState::Populated { fetched_at, .. } => {
            let _ = writeln!(out, "  (consultado el {})", fetched_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        _ => out.push_str("  [Buscar] escriba `buscar` para consultar el servidor\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_lib::AssetRecord;

    #[test]
    fn test_render_idle() {
        let text = render_form(&ScanState::Idle);
        assert!(text.starts_with("Escáner Auditoria QR\n"));
        assert!(!text.contains("Modelo"));
    }

    #[test]
    fn test_render_pending() {
        let state = ScanState::ResultPending {
            session: 1,
            code: "ACT-0001".to_string(),
            form: AssetRecord::default(),
        };

        let text = render_form(&state);
        assert!(text.starts_with("Resultado del Activo Escaneado\n"));
        assert!(text.contains("  Resultado         : ACT-0001\n"));
        assert!(text.contains("  Nombre del Activo : \n"));
        assert!(text.contains("  Persona Asignada  : \n"));
        assert!(text.contains("buscar"));
    }

    #[test]
    fn test_render_populated() {
        let state = ScanState::Populated {
            session: 1,
            code: "ACT-0001".to_string(),
            form: AssetRecord {
                model: "HP840".to_string(),
                id_number: "001-1234567-8".to_string(),
                ..Default::default()
            },
            fetched_at: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        };

        let text = render_form(&state);
        assert!(text.contains("  Modelo            : HP840\n"));
        // 带重音的标签按字符数补齐
        assert!(text.contains("  Cédula            : 001-1234567-8\n"));
        assert!(text.contains("(consultado el 2024-05-06 07:08:09 UTC)"));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 资产记录
///
/// 服务端 `activos_auditoria.php` 返回的资产信息，字段名与接口保持一致（下划线风格）。
///
/// - 每次查询成功都会创建一个新的记录，表单中的内容整体替换，不做字段合并
/// - 接口中缺失或为`null`的字段按空字符串处理，不区分"部分记录"
/// - 响应必须是JSON对象；PHP查不到数据时返回的`[]`等非对象响应一律视为解析失败
/// - 用户在表单中的修改通过 [`AssetRecord::with_field`] 生成新的记录，不会原地修改
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AssetRecord {
    /// 型号
    #[serde(rename = "modelo")]
    pub model: String,

    /// 序列号
    #[serde(rename = "serie")]
    pub serial: String,

    /// 品牌
    #[serde(rename = "marca")]
    pub brand: String,

    /// 资产名称
    #[serde(rename = "nombre_del_activo")]
    pub asset_name: String,

    /// 资产使用人
    #[serde(rename = "persona_asignada")]
    pub assigned_person: String,

    /// 使用人身份证号
    #[serde(rename = "cedula")]
    pub id_number: String,
}

/// 只接受JSON对象
///
/// 派生的结构体反序列化同时接受数组（按位置填充字段），这里先解码为对象再逐个取字段。
impl TryFrom<Map<String, Value>> for AssetRecord {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        AssetField::ALL
            .into_iter()
            .try_fold(AssetRecord::default(), |record, field| match object.remove(field.wire_key()) {
                None | Some(Value::Null) => Ok(record),
                Some(Value::String(value)) => Ok(record.with_field(field, value)),
                Some(other) => Err(format!("字段 `{}` 不是字符串: {}", field.wire_key(), other)),
            })
    }
}

impl AssetRecord {
    /// 读取指定字段的值
    pub fn get(&self, field: AssetField) -> &str {
        match field {
            AssetField::Model => &self.model,
            AssetField::Serial => &self.serial,
            AssetField::Brand => &self.brand,
            AssetField::AssetName => &self.asset_name,
            AssetField::AssignedPerson => &self.assigned_person,
            AssetField::IdNumber => &self.id_number,
        }
    }

    /// 替换单个字段，返回新的记录
    ///
    /// 用户在表单中的输入是自由文本，直接整体覆盖该字段
    pub fn with_field(self, field: AssetField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            AssetField::Model => Self { model: value, ..self },
            AssetField::Serial => Self { serial: value, ..self },
            AssetField::Brand => Self { brand: value, ..self },
            AssetField::AssetName => Self { asset_name: value, ..self },
            AssetField::AssignedPerson => Self { assigned_person: value, ..self },
            AssetField::IdNumber => Self { id_number: value, ..self },
        }
    }

    /// 六个字段是否全部为空
    pub fn is_blank(&self) -> bool {
        AssetField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// 表单中的资产字段，按界面显示顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetField {
    Model,
    Serial,
    Brand,
    AssetName,
    AssignedPerson,
    IdNumber,
}

impl AssetField {
    /// 全部字段（表单显示顺序）
    pub const ALL: [AssetField; 6] = [
        AssetField::Model,
        AssetField::Serial,
        AssetField::Brand,
        AssetField::AssetName,
        AssetField::AssignedPerson,
        AssetField::IdNumber,
    ];

    /// 表单中显示的标签
    pub fn label(self) -> &'static str {
        match self {
            AssetField::Model => "Modelo",
            AssetField::Serial => "Serie",
            AssetField::Brand => "Marca",
            AssetField::AssetName => "Nombre del Activo",
            AssetField::AssignedPerson => "Persona Asignada",
            AssetField::IdNumber => "Cédula",
        }
    }

    /// 接口JSON中的字段名
    pub fn wire_key(self) -> &'static str {
        match self {
            AssetField::Model => "modelo",
            AssetField::Serial => "serie",
            AssetField::Brand => "marca",
            AssetField::AssetName => "nombre_del_activo",
            AssetField::AssignedPerson => "persona_asignada",
            AssetField::IdNumber => "cedula",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            AssetField::Model => "model",
            AssetField::Serial => "serial",
            AssetField::Brand => "brand",
            AssetField::AssetName => "asset_name",
            AssetField::AssignedPerson => "assigned_person",
            AssetField::IdNumber => "id_number",
        }
    }
}

impl fmt::Display for AssetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// 无法识别的字段名
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的资产字段: {0}")]
pub struct UnknownAssetField(pub String);

impl FromStr for AssetField {
    type Err = UnknownAssetField;

    /// 同时接受接口字段名（`nombre_del_activo`）和英文字段名（`asset_name`），忽略大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        AssetField::ALL
            .into_iter()
            .find(|f| f.wire_key() == name || f.snake_name() == name)
            .ok_or_else(|| UnknownAssetField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_names() {
        let raw = r#"{"modelo":"HP840","serie":"SN123","marca":"HP","nombre_del_activo":"Laptop","persona_asignada":"Jane Doe","cedula":"001-1234567-8"}"#;
        let record: AssetRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.model, "HP840");
        assert_eq!(record.serial, "SN123");
        assert_eq!(record.brand, "HP");
        assert_eq!(record.asset_name, "Laptop");
        assert_eq!(record.assigned_person, "Jane Doe");
        assert_eq!(record.id_number, "001-1234567-8");
    }

    #[test]
    fn test_missing_and_null_fields_become_empty() {
        let raw = r#"{"modelo":"T14","cedula":null,"extra":42}"#;
        let record: AssetRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.model, "T14");
        assert_eq!(record.serial, "");
        assert_eq!(record.id_number, "");
        assert!(!record.is_blank());
        assert!(AssetRecord::default().is_blank());
    }

    #[test]
    fn test_invalid_body_is_rejected() {
        assert!(serde_json::from_str::<AssetRecord>("42").is_err());
        assert!(serde_json::from_str::<AssetRecord>(r#"{"modelo": 840}"#).is_err());
        assert!(serde_json::from_str::<AssetRecord>("<html>").is_err());
        // PHP查不到数据时返回空数组，按位置排列的数组也不能当作记录
        assert!(serde_json::from_str::<AssetRecord>("[]").is_err());
        assert!(serde_json::from_str::<AssetRecord>(r#"["HP840","SN123","HP","Laptop","Jane Doe","001"]"#).is_err());
    }

    #[test]
    fn test_field_display_pads_label() {
        assert_eq!(format!("{:<8}|", AssetField::Brand), "Marca   |");
        assert_eq!(AssetField::IdNumber.to_string(), "Cédula");
    }

    #[test]
    fn test_with_field_replaces_single_field() {
        let record = AssetRecord {
            model: "HP840".to_string(),
            brand: "HP".to_string(),
            ..Default::default()
        };

        let edited = record.clone().with_field(AssetField::Brand, "Hewlett-Packard");
        assert_eq!(edited.brand, "Hewlett-Packard");
        assert_eq!(edited.model, "HP840");
        // 原记录不受影响
        assert_eq!(record.brand, "HP");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("nombre_del_activo".parse::<AssetField>(), Ok(AssetField::AssetName));
        assert_eq!("Assigned_Person".parse::<AssetField>(), Ok(AssetField::AssignedPerson));
        assert_eq!(" cedula ".parse::<AssetField>(), Ok(AssetField::IdNumber));
        assert!("color".parse::<AssetField>().is_err());
    }
}

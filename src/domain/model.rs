use crate::utils::error::{KusError, Result};
use serde_json::Value;

/// 端點回傳的單一項目，內容不透明
pub type Ku = String;

/// 要寫入列表的有序 Ku 序列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KuList(Vec<Ku>);

impl KuList {
    /// 由回應的 JSON 建立列表。
    ///
    /// 元素不做型別檢查：字串原樣保留，`null` 為空字串，其他值取其 JSON 文字。
    /// 只有非陣列的內容無法逐項走訪，回傳 [`KusError::NotAList`]。
    pub fn from_json(body: Value) -> Result<Self> {
        match body {
            Value::Array(items) => Ok(Self(items.into_iter().map(item_text).collect())),
            other => Err(KusError::NotAList {
                found: json_kind(&other),
            }),
        }
    }

    pub fn items(&self) -> &[Ku] {
        &self.0
    }
}

fn item_text(item: Value) -> Ku {
    match item {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renderer 單次載入的結果。僅供觀察，不攜帶錯誤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    ContainerMissing,
    Failed,
}

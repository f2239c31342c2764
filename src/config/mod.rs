#[cfg(feature = "cli")]
mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::dom::MemoryDocument;
use crate::adapters::http::DEFAULT_BASE_URL;
use crate::core::renderer::KUS_CONTAINER_ID;
use crate::utils::error::{KusError, Result};
use crate::utils::validation::{validate_url, Validate};
use std::str::FromStr;

/// 頁面輸出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 2] = ["html", "text"];

    pub fn render(&self, document: &MemoryDocument) -> String {
        match self {
            OutputFormat::Html => document.to_html(),
            OutputFormat::Text => document
                .element_by_id(KUS_CONTAINER_ID)
                .map(|list| list.child_texts().join("\n"))
                .unwrap_or_default(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = KusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            _ => Err(KusError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Valid values: {}", Self::VALUES.join(", ")),
            }),
        }
    }
}

/// 合併 CLI、設定檔與預設值後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::default(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

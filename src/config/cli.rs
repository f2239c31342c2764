use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kus-widget")]
#[command(about = "Fetch knowledge units from /api/kus and render them into a page list")]
pub struct CliConfig {
    #[arg(long, help = "Base URL that /api/kus is resolved against")]
    pub base_url: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Output format: html or text")]
    pub format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// CLI 參數優先，其次設定檔，最後是預設值
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config.apply_to(&mut settings)?;
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.parse()?;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nbase_url = \"http://from-file:8000\"\n\n[output]\nformat = \"text\""
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "kus-widget",
            "--config",
            file.path().to_str().unwrap(),
            "--base-url",
            "http://from-cli:9000",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.base_url, "http://from-cli:9000");
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = CliConfig::parse_from(["kus-widget"]);
        assert_eq!(cli.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let cli = CliConfig::parse_from(["kus-widget", "--base-url", "ftp://example.com"]);
        assert!(cli.resolve().is_err());
    }
}

pub mod toml_config;

use crate::core::resolver::SUPPORTED_YEAR;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_PATH: &str = "data/daily_motivation.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "daily-motivation")]
#[command(about = "Daily Motivation - Flashcards: one card per calendar day over HTML and JSON")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Listen address (default 0.0.0.0)")]
    pub host: Option<String>,

    #[arg(long, help = "Listen port (default 8000)")]
    pub port: Option<u16>,

    #[arg(long, help = "Card data JSON file (default data/daily_motivation.json)")]
    pub data_path: Option<String>,

    #[arg(long, help = "Year the card table is keyed by (default 2026)")]
    pub year: Option<i32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// 合併後的最終設定：CLI > TOML > 預設值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub data_path: String,
    pub year: i32,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: DEFAULT_DATA_PATH.to_string(),
            year: SUPPORTED_YEAR,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Settings::default();
        let server = file.and_then(|f| f.server.as_ref());
        let data = file.and_then(|f| f.data.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        Self {
            host: cli
                .host
                .clone()
                .or_else(|| server.and_then(|s| s.host.clone()))
                .unwrap_or(defaults.host),
            port: cli
                .port
                .or_else(|| server.and_then(|s| s.port))
                .unwrap_or(defaults.port),
            data_path: cli
                .data_path
                .clone()
                .or_else(|| data.and_then(|d| d.path.clone()))
                .unwrap_or(defaults.data_path),
            year: cli
                .year
                .or_else(|| data.and_then(|d| d.year))
                .unwrap_or(defaults.year),
            verbose: cli.verbose || logging.and_then(|l| l.verbose).unwrap_or(false),
            json_logs: cli.json_logs || logging.and_then(|l| l.json).unwrap_or(false),
        }
    }

    /// 讀取 `--config` 指定的 TOML 檔 (若有) 並與 CLI 參數合併
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        validate_path("data.path", &self.data_path)?;
        validate_file_extension("data.path", &self.data_path, &["json"])?;
        validate_range("data.year", self.year, 1, 9999)?;
        Ok(())
    }
}

//! CLI 配置
//!
//! 包含 CLI 特有的配置：配置文件结构和日志级别组合

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::Level;

use itlang_config::{Phase, ReaderConfig};

/// `--config` 指向的 JSON 文件
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 读取器配置
    pub reader: ReaderConfig,
    /// 日志级别: "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// 读取器日志级别，缺省时跟随 `log_level`
    pub reader_log_level: Option<String>,
    /// 读取器日志额外追加写入的文件
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// 读取并解析配置文件
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
    }
}

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub reader: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            reader: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        if target == Phase::Reader.target() {
            self.reader.unwrap_or(self.global)
        } else {
            self.global
        }
    }
}

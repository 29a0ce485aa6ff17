//! 应用配置
//!
//! 数据目录优先级：命令行 `--data-dir` / 环境变量 `HANZI_CARDS_DIR`（由 CLI 层解析）
//! > 系统数据目录下的 `hanzi-cards` > 当前目录下的 `.hanzi-cards`。
//! 数据目录中可选的 `settings.json` 覆盖排版与计时参数。

use crate::print::PackLimits;
use crate::session::{DEFAULT_DEBOUNCE, DEFAULT_PRINT_FALLBACK};
use crate::utils::read_json_or_default;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "hanzi-cards";
const SETTINGS_FILE: &str = "settings.json";

/// settings.json 内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub pack: PackLimits,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_print_fallback_secs")]
    pub print_fallback_secs: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_print_fallback_secs() -> u64 {
    DEFAULT_PRINT_FALLBACK.as_secs()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pack: PackLimits::default(),
            debounce_ms: default_debounce_ms(),
            print_fallback_secs: default_print_fallback_secs(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub settings: Settings,
}

impl AppConfig {
    /// 加载配置，`data_dir` 为 None 时使用默认数据目录
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let settings = read_json_or_default(&data_dir.join(SETTINGS_FILE));
        Self { data_dir, settings }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn pack_limits(&self) -> PackLimits {
        self.settings.pack
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.settings.debounce_ms)
    }

    pub fn print_fallback(&self) -> Duration {
        Duration::from_secs(self.settings.print_fallback_secs)
    }
}

/// 默认数据目录
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_settings_file() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(Some(temp.path().to_path_buf()));

        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.pack_limits().max_words_per_row, 6);
        assert_eq!(config.pack_limits().max_chars_per_row, 14);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.print_fallback(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            r#"{"pack": {"maxCharsPerRow": 10}, "debounceMs": 150}"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(temp.path().to_path_buf()));
        assert_eq!(config.pack_limits().max_words_per_row, 6);
        assert_eq!(config.pack_limits().max_chars_per_row, 10);
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.print_fallback(), Duration::from_secs(5));
    }
}

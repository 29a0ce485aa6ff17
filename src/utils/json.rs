//! JSON 工具

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 读取 JSON 文件
pub fn read_json<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// 写入 JSON 文件（格式化），自动创建父目录
pub fn write_json<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

/// 读取 JSON 文件，文件不存在时静默返回默认值，损坏时记录警告后返回默认值
pub fn read_json_or_default<T>(path: &Path) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    if !path.exists() {
        return T::default();
    }

    read_json(path).unwrap_or_else(|e| {
        log::warn!("{:#}", e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{Snapshot, StatusMap, WordStatus};
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_snapshot() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("backup/progress.json");

        let mut map = StatusMap::new();
        map.insert("0_0".to_string(), WordStatus::Maybe);
        let snapshot = Snapshot::capture(map, vec![]);

        write_json(&file_path, &snapshot).unwrap();

        let loaded: Snapshot = read_json(&file_path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_read_json_or_default_missing_and_corrupt() {
        let temp = TempDir::new().unwrap();

        let missing: StatusMap = read_json_or_default(&temp.path().join("nonexistent.json"));
        assert!(missing.is_empty());

        let corrupt_path = temp.path().join("corrupt.json");
        fs::write(&corrupt_path, "{ oops").unwrap();
        let corrupt: StatusMap = read_json_or_default(&corrupt_path);
        assert!(corrupt.is_empty());
    }
}

// CLI 集成测试：每个测试使用独立的临时数据目录

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hanzi-cards").unwrap();
    cmd.arg("--data-dir").arg(data.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_first_run_shows_help_once() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("使用帮助"));

    cmd(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("使用帮助").not());
}

#[test]
fn test_list_builtin_lessons() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("课文1"))
        .stdout(predicate::str::contains("诗歌"))
        .stdout(predicate::str::contains("[0_0]"));
}

#[test]
fn test_search_without_results() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["list", "--search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("没有找到包含 \"zzzz\" 的生字"));
}

#[test]
fn test_toggle_then_filter() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["toggle", "0_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("诗歌"))
        .stdout(predicate::str::contains("可能会"));

    cmd(&data)
        .args(["list", "--filter", "maybe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("诗歌"))
        .stdout(predicate::str::contains("趁机").not());
}

#[test]
fn test_toggle_unknown_key_fails() {
    let data = TempDir::new().unwrap();

    cmd(&data).args(["toggle", "99_99"]).assert().failure();
    cmd(&data).args(["toggle", "abc"]).assert().failure();
}

#[test]
fn test_add_custom_word() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["add", "朋友", "péng you"])
        .assert()
        .success()
        .stdout(predicate::str::contains("已添加\"朋友\""));

    cmd(&data)
        .args(["list", "--search", "朋友"])
        .assert()
        .success()
        .stdout(predicate::str::contains("自定义"))
        .stdout(predicate::str::contains("péng you"));
}

#[test]
fn test_add_rejects_empty_word() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["add", "  ", "péng you"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("请填写词组"));
}

#[test]
fn test_export_reset_import_roundtrip() {
    let data = TempDir::new().unwrap();
    let backup = data.path().join("backup.json");

    cmd(&data).args(["toggle", "0_1"]).assert().success();
    cmd(&data).args(["add", "朋友", "péng you"]).assert().success();

    cmd(&data)
        .arg("export")
        .arg("--output")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("导出成功"));

    let exported = fs::read_to_string(&backup).unwrap();
    assert!(exported.contains("\"wordStatus\""));
    assert!(exported.contains("\"appName\": \"生字学习助手\""));

    cmd(&data).args(["reset", "--yes"]).assert().success();
    cmd(&data)
        .args(["list", "--filter", "maybe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("趁机").not());

    cmd(&data)
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("导入成功"));

    cmd(&data)
        .args(["list", "--filter", "maybe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("趁机"));
    cmd(&data)
        .args(["list", "--search", "朋友"])
        .assert()
        .success()
        .stdout(predicate::str::contains("朋友"));
}

#[test]
fn test_import_invalid_file() {
    let data = TempDir::new().unwrap();
    let bad = data.path().join("bad.json");
    fs::write(&bad, "not json").unwrap();

    cmd(&data)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("文件格式错误"));

    let empty = data.path().join("empty.json");
    fs::write(&empty, r#"{"version": "1.0"}"#).unwrap();

    cmd(&data).arg("import").arg(&empty).assert().failure();
}

#[test]
fn test_print_grid_sheet() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["print", "--search", "诗歌"])
        .assert()
        .success()
        .stdout(predicate::str::contains("┌"))
        .stdout(predicate::str::contains("【课文1】"));
}

#[test]
fn test_practice_requires_selection() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .arg("practice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("请至少选择一个生字数量"));
}

#[test]
fn test_practice_to_file() {
    let data = TempDir::new().unwrap();
    let out = data.path().join("sheet.txt");

    cmd(&data)
        .args(["practice", "--unknown", "3", "--output"])
        .arg(&out)
        .assert()
        .success();

    let sheet = fs::read_to_string(&out).unwrap();
    assert!(sheet.contains("自定义生字本 (共3个生字)"));
}

#[test]
fn test_practice_exceeding_available_fails() {
    let data = TempDir::new().unwrap();

    cmd(&data)
        .args(["practice", "--known", "1"])
        .assert()
        .failure();
}

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn vitrin(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vitrin").unwrap();
    cmd.current_dir(dir).arg("--site-root").arg(dir);
    cmd
}

#[test]
fn test_init_seeds_content_tree() {
    let dir = tempfile::tempdir().unwrap();
    vitrin(dir.path()).arg("init").assert().success();

    assert!(dir.path().join("content/data.json").exists());
    assert!(dir.path().join("content/settings.json").exists());
    assert!(dir.path().join("content/products/index.json").exists());

    vitrin(dir.path())
        .args(["--json", "content", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("products/index.json"));
}

#[test]
fn test_get_missing_file_exits_not_found() {
    let dir = tempfile::tempdir().unwrap();
    vitrin(dir.path())
        .args(["content", "get", "ghost.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_put_member_registers_in_index() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("new-product.json");
    std::fs::write(&input, r#"{"title": "Linen Shirt", "price": "$45"}"#).unwrap();

    vitrin(dir.path())
        .args(["content", "put", "products/linen-shirt.json"])
        .arg(&input)
        .assert()
        .success();

    vitrin(dir.path())
        .args(["content", "get", "products/index.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linen-shirt.json"));

    vitrin(dir.path())
        .args(["content", "rm", "products/linen-shirt.json"])
        .assert()
        .success();
    vitrin(dir.path())
        .args(["content", "get", "products/index.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linen-shirt.json").not());
}

#[test]
fn test_cache_keys_after_init() {
    let dir = tempfile::tempdir().unwrap();
    vitrin(dir.path()).arg("init").assert().success();

    vitrin(dir.path())
        .args(["cache", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cms_settings.json"));
}

#[test]
fn test_render_home_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    vitrin(dir.path()).arg("init").assert().success();

    vitrin(dir.path())
        .args(["render", "index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sale 20% Off"))
        .stdout(predicate::str::contains("Famms - Fashion HTML Template"));
}

#[test]
fn test_export_writes_backup_document() {
    let dir = tempfile::tempdir().unwrap();
    vitrin(dir.path()).arg("init").assert().success();

    let out = dir.path().join("backup.json");
    vitrin(dir.path())
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success();

    let backup: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(backup["settings"]["store_name"].is_string());
}

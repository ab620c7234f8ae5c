use i18n_usage::{ScanBuilder, scan, used_keys};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    write_file(&root.join("a.js"), "labelFn = $t('greeting');");
    write_file(&root.join("node_modules/b.js"), ".t(\"greeting\")");
    write_file(&root.join("c.js"), ".T('farewell')");
    let keys = used_keys(ScanBuilder::new(&root).build()).unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys.get("greeting").unwrap(), &[root.join("a.js")]);
    assert_eq!(keys.get("farewell").unwrap(), &[root.join("c.js")]);
}
#[test]
fn integration_multi_file_aggregation() {
    let dir = tempdir().unwrap();
    let path_a = dir.path().join("fileA.txt");
    let path_b = dir.path().join("fileB.txt");
    write_file(&path_a, "x.t(\"hello\")");
    write_file(&path_b, "$T('hello')");
    let keys = used_keys(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(keys.get("hello").unwrap(), &[path_a, path_b]);
}
#[test]
fn integration_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("src/app.js"), "$t('a'); $t('b'); $t('a');");
    write_file(&dir.path().join("src/view/page.vue"), "{{ $t('b') }}");
    write_file(&dir.path().join("README.md"), "call .t(\"a\") to translate");
    let first = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let second = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(first.keys, second.keys);
    assert_eq!(first.stats, second.stats);
    assert_eq!(
        first.keys.get("a").unwrap(),
        &[
            dir.path().join("README.md"),
            dir.path().join("src/app.js"),
            dir.path().join("src/app.js"),
        ]
    );
}
#[test]
fn integration_json_shape() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.js"), "$t('k')");
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    let paths = json["keys"]["k"].as_array().unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].as_str().unwrap().ends_with("a.js"));
    assert_eq!(json["stats"]["files_scanned"], 1);
    assert!(json.get("skipped").is_none());
}

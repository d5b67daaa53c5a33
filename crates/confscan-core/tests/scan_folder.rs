//! Integration test: scan real folders the way the `confscan` binary does,
//! prompting first and then loading whatever the prompt resolved to.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use confscan_core::{load_documents, resolve_folder, FolderPath};
use serde_json::{json, Value};

/// Entry names in the order the platform lists them.
fn listing_order(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn mixed_folder_keeps_json_in_listing_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.json"), r#"{"x":1}"#).unwrap();
    std::fs::write(dir.path().join("b.txt"), "not json").unwrap();
    std::fs::write(dir.path().join("c.json"), "[1,2,3]").unwrap();

    let folder = FolderPath::existing(dir.path().to_str().unwrap()).unwrap();
    let mut scanned = Vec::new();
    let docs = load_documents(&folder, |name| scanned.push(name.to_string())).unwrap();

    let order = listing_order(dir.path());
    assert_eq!(scanned, order);

    let expected: Vec<Value> = order
        .iter()
        .filter_map(|name| match name.as_str() {
            "a.json" => Some(json!({"x": 1})),
            "c.json" => Some(json!([1, 2, 3])),
            _ => None,
        })
        .collect();
    let values: Vec<Value> = docs.into_iter().map(|d| d.into_value()).collect();
    assert_eq!(values, expected);
}

#[test]
fn prompt_then_load_with_backslash_path() {
    let dir = tempfile::tempdir().unwrap();
    let configs = dir.path().join("configs");
    std::fs::create_dir(&configs).unwrap();
    std::fs::write(configs.join("rack.json"), r#"{"rack":7}"#).unwrap();

    let typed = format!("{}\\configs\n", dir.path().display());
    let mut input = Cursor::new(typed.into_bytes());
    let mut output = Vec::new();
    let folder = resolve_folder(&mut input, &mut output, || Ok(PathBuf::from("/"))).unwrap();

    let docs = load_documents(&folder, |_| {}).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].value, json!({"rack": 7}));
}

#[test]
fn prompt_then_load_after_typo() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.json"), "1").unwrap();

    let typed = format!("{}-typo\n{}\n", dir.path().display(), dir.path().display());
    let mut input = Cursor::new(typed.into_bytes());
    let mut output = Vec::new();
    let folder = resolve_folder(&mut input, &mut output, || Ok(PathBuf::from("/"))).unwrap();

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("please check for spelling mistakes"));
    let docs = load_documents(&folder, |_| {}).unwrap();
    assert_eq!(docs[0].value, json!(1));
}

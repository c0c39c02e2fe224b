//! Document loading through the public entry points

use robot_config::{load_document, parse_document, ConfigError};
use robot_core::{DecodeErrorKind, Node};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_parse_document_preserves_order() {
    let node = parse_document("commands:\n  - sleep: {seconds: 1}\n  - type: {text: hi}\n").unwrap();
    let commands = node.as_map().unwrap()["commands"].as_list().unwrap();

    let names: Vec<&str> = commands
        .iter()
        .map(|entry| entry.as_map().unwrap().keys().next().unwrap().as_str())
        .collect();
    assert_eq!(names, vec!["sleep", "type"]);
}

#[test]
fn test_scalars_become_strings() {
    let node = parse_document("x: 12\ny: true\nz: -3\n").unwrap();
    let map = node.as_map().unwrap();
    assert_eq!(map["x"], Node::scalar("12"));
    assert_eq!(map["y"], Node::scalar("true"));
    assert_eq!(map["z"], Node::scalar("-3"));
}

#[test]
fn test_load_document_by_relative_path() {
    let dir = TempDir::new_in(".").unwrap();
    let name = dir.path().file_name().unwrap();
    fs::create_dir(dir.path().join("scripts")).unwrap();
    fs::write(
        dir.path().join("scripts/main.yaml"),
        "commands:\n  - mouse: {x: 1, y: 2}\n",
    )
    .unwrap();

    let node = load_document(Path::new(name).join("scripts/main.yaml")).unwrap();
    let entry = &node.as_map().unwrap()["commands"].as_list().unwrap()[0];
    let options = entry.as_map().unwrap()["mouse"].as_map().unwrap();
    assert_eq!(options["x"], Node::scalar("1"));
    assert_eq!(options["y"], Node::scalar("2"));
}

#[test]
fn test_scalars_keep_document_spelling() {
    let node = parse_document("text: 1.50\nargs: [0x1F, 1e3, \"007\"]\n").unwrap();
    let map = node.as_map().unwrap();
    assert_eq!(map["text"], Node::scalar("1.50"));
    assert_eq!(
        map["args"],
        Node::list([Node::scalar("0x1F"), Node::scalar("1e3"), Node::scalar("007")])
    );
}

#[test]
fn test_null_value_reports_path() {
    let err = parse_document("commands:\n  - sleep:\n").unwrap_err();
    match err {
        ConfigError::Classify { source, .. } => {
            assert_eq!(source.kind(), DecodeErrorKind::NotClassifiable);
            assert!(source.to_string().contains("commands[0].sleep"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_document(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

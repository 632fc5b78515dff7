//! JSON boundary and config file tests.

use contra::{
    CheckerOptions, ClassCheckResult, DiagnosticCode, check_classes_json, check_hierarchy_json,
    load_checker_config, load_config,
};
use std::io::Write;

const SAMPLE_CLASSES: &str = r#"[
  {
    "name": "Shape",
    "isAbstract": true,
    "members": [
      { "name": "area", "kind": "method", "isAbstract": true, "ownerClass": "Shape",
        "valueType": { "kind": "function", "value": { "params": [], "returnType": { "kind": "number" } } } }
    ]
  },
  {
    "name": "Square",
    "members": [
      { "name": "side", "kind": "field", "ownerClass": "Square", "valueType": { "kind": "number" } }
    ],
    "ancestors": [ { "name": "Shape" } ]
  }
]"#;

#[test]
fn test_check_classes_json_round_trip() {
    let output = check_classes_json(SAMPLE_CLASSES, &CheckerOptions::default()).unwrap();
    let results: Vec<ClassCheckResult> = serde_json::from_str(&output).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].class_name, "Shape");
    assert_eq!(results[0].pending.len(), 1);
    // Without hierarchy resolution, Square only sees what its ancestor entry
    // lists, which is nothing.
    assert!(results[1].is_clean());
}

#[test]
fn test_check_hierarchy_json_reraises_pending() {
    let output = check_hierarchy_json(SAMPLE_CLASSES, &CheckerOptions::default()).unwrap();
    let results: Vec<ClassCheckResult> = serde_json::from_str(&output).unwrap();

    assert_eq!(results[1].codes(), vec![DiagnosticCode::ErrUnimplementedAbstractMember]);
    let raw: serde_json::Value = serde_json::from_str(&output).unwrap();
    let diagnostic = &raw[1]["diagnostics"][0];
    assert_eq!(diagnostic["memberName"], "area");
    assert_eq!(diagnostic["code"], "ERR_UNIMPLEMENTED_ABSTRACT_MEMBER");
    assert_eq!(diagnostic["category"], "error");
    assert_eq!(diagnostic["declaredIn"], "Shape");
    assert_eq!(diagnostic["expected"], serde_json::json!({ "kind": "kind", "value": "method" }));
    assert_eq!(diagnostic["actual"], serde_json::json!({ "kind": "none" }));
}

#[test]
fn test_malformed_input_is_a_host_error() {
    let err = check_classes_json(r#"[{ "name": 3 }]"#, &CheckerOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse class declarations"));

    let err = check_classes_json("not json", &CheckerOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse class declarations"));
}

#[test]
fn test_load_checker_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{
  // stricter checks for this project
  "checkerOptions": {{ "strict": "true", }},
}}"#
    )
    .unwrap();

    let options = load_checker_config(file.path()).unwrap();

    assert_eq!(options, CheckerOptions::strict());
}

#[test]
fn test_load_missing_config_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contra.json");

    let err = load_checker_config(&path).unwrap_err();

    assert!(format!("{err:#}").contains("contra.json"));
}

#[test]
fn test_load_config_with_log_section() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{
  "checkerOptions": {{ "reportAccessorAbstractness": true }},
  "log": {{ "filter": "contra_checker=debug", "format": "tree" }},
}}"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    let tracing = config.tracing();

    assert!(config.checker_options().report_accessor_abstractness);
    assert!(!config.checker_options().strict);
    assert!(tracing.is_enabled());
}

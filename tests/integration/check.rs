//! Read-only integrity report

use s4a_dict::commands::check::{check, id_pattern};
use s4a_dict::config::IdScheme;

use super::helpers::{attribute_yaml, view_yaml, TestProject};

#[test]
fn test_clean_corpus() {
    let test = TestProject::new();
    test.attribute("qnh.yaml", &attribute_yaml("ATTR-100", "QNH", "Manual"))
        .view("Met.yaml", &view_yaml("Met", &["qnh"]));

    let report = check(&test.project()).unwrap();
    assert_eq!(report.records, 1);
    assert!(report.is_clean());
    assert!(report.unreferenced.is_empty());
}

#[test]
fn test_duplicates_and_missing_ids() {
    let test = TestProject::new();
    test.attribute("a.yaml", &attribute_yaml("ATTR-100", "Fuel Temp", "Manual"))
        .attribute("b.yaml", &attribute_yaml("ATTR-100", "fuel temp", "Manual"))
        .attribute("c.yaml", "name: Stand\n")
        .attribute("d.yaml", &attribute_yaml("GATE-7", "Gate", "Manual"));

    let report = check(&test.project()).unwrap();
    assert!(!report.is_clean());

    assert_eq!(report.duplicate_ids.len(), 1);
    assert_eq!(report.duplicate_ids["ATTR-100"].len(), 2);

    assert_eq!(report.duplicate_names.len(), 1);
    assert!(report.duplicate_names.contains_key("fuel temp"));

    assert_eq!(report.missing_ids.len(), 1);
    assert!(report.missing_ids[0].ends_with("c.yaml"));

    assert_eq!(report.malformed_ids.len(), 1);
    assert_eq!(report.malformed_ids[0].1, "GATE-7");

    assert_eq!(report.unreferenced, vec!["Fuel Temp", "Gate", "Stand"]);
}

#[test]
fn test_undefined_references_are_reported() {
    let test = TestProject::new();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    let report = check(&test.project()).unwrap();
    assert_eq!(report.undefined.len(), 1);
    assert_eq!(report.undefined[0].key, "gate number");
}

#[test]
fn test_check_writes_nothing() {
    let test = TestProject::new();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    check(&test.project()).unwrap();
    assert!(!test.exists("data/attributes/gate-number.yaml"));
    assert!(!test.exists("content"));
}

#[test]
fn test_id_pattern() {
    let pattern = id_pattern(&IdScheme::default()).unwrap();
    assert!(pattern.is_match("ATTR-100"));
    assert!(pattern.is_match("ATTR-1000"));
    assert!(!pattern.is_match("ATTR-10"));
    assert!(!pattern.is_match("attr-100"));
    assert!(!pattern.is_match("ATTR-100a"));

    let dotted = IdScheme {
        prefix: "S4A.X".to_string(),
        start: 1,
        width: 2,
    };
    let pattern = id_pattern(&dotted).unwrap();
    assert!(pattern.is_match("S4A.X-01"));
    assert!(!pattern.is_match("S4AYX-01"));
}

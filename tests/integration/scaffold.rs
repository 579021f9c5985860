//! Scaffolding placeholder records

use s4a_dict::commands::scaffold::{scaffold, SkipReason};

use super::helpers::{attribute_yaml, view_yaml, TestProject};

#[test]
fn test_creates_draft_record_for_missing_name() {
    let test = TestProject::new();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    let report = scaffold(&test.project(), false).unwrap();
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].id, "ATTR-100");
    assert_eq!(report.created[0].name, "Gate Number");

    let written = test.read("data/attributes/gate-number.yaml");
    assert!(written.contains("id: ATTR-100"));
    assert!(written.contains("name: Gate Number"));
    assert!(written.contains("description: Attribute representing Gate Number."));
    assert!(written.contains("dataType: String"));
    assert!(written.contains("source: Auto-generated"));
    assert!(written.contains("status: draft"));
}

#[test]
fn test_identifiers_skip_existing_ones() {
    let test = TestProject::new();
    test.attribute("qnh.yaml", &attribute_yaml("ATTR-100", "QNH", "Manual"))
        .attribute("rvr.yaml", &attribute_yaml("ATTR-101", "RVR", "Manual"))
        .view(
            "Met.yaml",
            &view_yaml("Met", &["QNH", "Wind Speed", "Cloud Base"]),
        );

    let report = scaffold(&test.project(), false).unwrap();
    let ids: Vec<(&str, &str)> = report
        .created
        .iter()
        .map(|c| (c.name.as_str(), c.id.as_str()))
        .collect();
    assert_eq!(ids, vec![("Cloud Base", "ATTR-102"), ("Wind Speed", "ATTR-103")]);
}

#[test]
fn test_second_run_creates_nothing() {
    let test = TestProject::new();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number", "Stand"]));

    let project = test.project();
    assert_eq!(scaffold(&project, false).unwrap().created.len(), 2);

    let again = scaffold(&project, false).unwrap();
    assert!(again.created.is_empty());
    assert!(again.skipped.is_empty());
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let test = TestProject::new();
    test.attribute(
        "flight-status.yaml",
        &attribute_yaml("ATTR-001", "Flight Status", "Manual"),
    )
    .object("Flight.yaml", "Name: Flight\nCoreAttributes:\n  - flight-status\n");

    let before = test.read("data/attributes/flight-status.yaml");
    let report = scaffold(&test.project(), false).unwrap();

    assert!(report.created.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.skipped[0].1, SkipReason::FileExists(_)));
    assert_eq!(test.read("data/attributes/flight-status.yaml"), before);
}

#[test]
fn test_names_without_slug_are_skipped() {
    let test = TestProject::new();
    test.view("Odd.yaml", &view_yaml("Odd", &["???", "Gate"]));

    let report = scaffold(&test.project(), false).unwrap();
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.skipped, vec![("???".to_string(), SkipReason::NoSlug)]);
}

#[test]
fn test_dry_run_writes_nothing() {
    let test = TestProject::new();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    let report = scaffold(&test.project(), true).unwrap();
    assert_eq!(report.created.len(), 1);
    assert!(!test.exists("data/attributes/gate-number.yaml"));
}

#[test]
fn test_creates_attributes_dir_when_absent() {
    let test = TestProject::new();
    std::fs::remove_dir_all(test.path("data/attributes")).unwrap();
    test.view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    let report = scaffold(&test.project(), false).unwrap();
    assert_eq!(report.created.len(), 1);
    assert!(test.exists("data/attributes/gate-number.yaml"));
}

#[test]
fn test_configured_identifier_scheme() {
    let test = TestProject::new();
    test.write(
        "dictionary.toml",
        "[identifiers]\nprefix = \"S4A\"\nstart = 1\nwidth = 5\n",
    )
    .view("Gates.yaml", &view_yaml("Gates", &["Gate Number"]));

    let report = scaffold(&test.project(), false).unwrap();
    assert_eq!(report.created[0].id, "S4A-00001");
}

#[test]
fn test_curated_record_with_unusual_constraints_keeps_its_identity() {
    let test = TestProject::new();
    test.attribute(
        "operating-mode.yaml",
        "id: ATTR-100\nname: Operating Mode\nsource: Manual\nvalues: [Normal, Closed]\nminLength: \"1\"\nprecision: 2.5\n",
    )
    .view(
        "Ops.yaml",
        &view_yaml("Ops", &["Operating Mode", "Gate Number"]),
    );

    let before = test.read("data/attributes/operating-mode.yaml");
    let report = scaffold(&test.project(), false).unwrap();

    assert_eq!(report.unreadable_files, 0);
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].name, "Gate Number");
    assert_eq!(report.created[0].id, "ATTR-101");
    assert_eq!(test.read("data/attributes/operating-mode.yaml"), before);
}

#[test]
fn test_exhausted_identifier_scheme_skips_remaining_names() {
    let test = TestProject::new();
    test.write(
        "dictionary.toml",
        "[identifiers]\nprefix = \"ATTR\"\nstart = 4294967295\nwidth = 3\n",
    )
    .view("Gates.yaml", &view_yaml("Gates", &["Gate Number", "Stand"]));

    let report = scaffold(&test.project(), false).unwrap();
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].id, "ATTR-4294967295");
    assert_eq!(
        report.skipped,
        vec![("Stand".to_string(), SkipReason::NoIdentifier)]
    );
    assert!(!test.exists("data/attributes/stand.yaml"));
}

//! Gap analysis over small corpora

use s4a_dict::commands::analyze::analyze;
use s4a_dict::reconcile::ReferenceSite;
use s4a_dict::store::Corpus;

use super::helpers::{attribute_yaml, view_yaml, TestProject};

fn run(test: &TestProject) -> s4a_dict::commands::analyze::AnalysisReport {
    let project = test.project();
    analyze(&Corpus::load(&project.layout))
}

#[test]
fn test_case_insensitive_reference_is_not_missing() {
    let test = TestProject::new();
    test.attribute(
        "flight-status.yaml",
        &attribute_yaml("ATTR-001", "Flight Status", "Manual"),
    )
    .object(
        "Flight.yaml",
        "Name: Flight\nCoreAttributes:\n  - flight status\n  - FLIGHT STATUS \n",
    );

    let report = run(&test);
    assert_eq!(report.defined, 1);
    assert_eq!(report.referenced, 1);
    assert!(report.missing.is_empty());
}

#[test]
fn test_hyphenated_reference_is_a_different_name() {
    let test = TestProject::new();
    test.attribute(
        "flight-status.yaml",
        &attribute_yaml("ATTR-001", "Flight Status", "Manual"),
    )
    .object("Flight.yaml", "Name: Flight\nCoreAttributes:\n  - flight-status\n");

    let report = run(&test);
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].key, "flight-status");
}

#[test]
fn test_spelling_variants_collapse_to_one_gap() {
    let test = TestProject::new();
    test.object(
        "Aircraft.yaml",
        "Name: Aircraft\nCoreAttributes:\n  - Fuel Temp\n",
    )
    .view("Ops_View.yaml", &view_yaml("Ops", &["fuel temp ", "FUEL TEMP"]));

    let report = run(&test);
    assert_eq!(report.missing.len(), 1);
    let gap = &report.missing[0];
    assert_eq!(gap.key, "fuel temp");
    assert_eq!(gap.display, "Fuel Temp");
    assert_eq!(
        gap.sites,
        vec![
            ReferenceSite::Object("Aircraft".to_string()),
            ReferenceSite::View("Ops".to_string()),
            ReferenceSite::View("Ops".to_string()),
        ]
    );
}

#[test]
fn test_perspective_and_mapping_references() {
    let test = TestProject::new();
    test.object(
        "Gate.yaml",
        "Name: Gate\nCoreAttributes:\n  - Name: Gate Number\nSystemPerspectives:\n  Operations:\n    RelevantAttributes:\n      - Stand Type\n",
    );

    let report = run(&test);
    let keys: Vec<&str> = report.missing.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["gate number", "stand type"]);
    assert_eq!(
        report.missing[1].sites,
        vec![ReferenceSite::Perspective("Operations".to_string())]
    );
}

#[test]
fn test_malformed_files_are_skipped() {
    let test = TestProject::new();
    test.attribute("broken.yaml", "id: [unclosed\n")
        .attribute("empty.yaml", "")
        .attribute("qnh.yaml", &attribute_yaml("ATTR-002", "QNH", "Manual"))
        .view("Met.yaml", &view_yaml("Met", &["QNH", "Wind Speed"]));

    let report = run(&test);
    assert_eq!(report.defined, 1);
    assert_eq!(report.unreadable_files, 1);
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].key, "wind speed");
}

#[test]
fn test_missing_directories_are_empty() {
    let test = TestProject::new();
    std::fs::remove_dir_all(test.path("data/views")).unwrap();

    let report = run(&test);
    assert_eq!(report.defined, 0);
    assert!(report.missing.is_empty());
}

#[test]
fn test_site_summary_truncates() {
    let test = TestProject::new();
    for title in ["A", "B", "C", "D", "E"] {
        test.view(&format!("{title}.yaml"), &view_yaml(title, &["Gate Number"]));
    }

    let report = run(&test);
    let summary = report.missing[0].site_summary().to_string();
    assert_eq!(summary, "View: A, View: B, View: C (+2 more)");
}

#[test]
fn test_unusual_constraint_types_still_define_the_name() {
    let test = TestProject::new();
    test.attribute(
        "operating-mode.yaml",
        "id: ATTR-100\nname: Operating Mode\nsource: Manual\nvalues: [Normal, Closed]\n",
    )
    .attribute(
        "fare.yaml",
        "id: ATTR-101\nname: Fare\nminLength: \"1\"\nprecision: 2.5\n",
    )
    .view("Ops.yaml", &view_yaml("Ops", &["operating mode", "Fare"]));

    let report = run(&test);
    assert_eq!(report.defined, 2);
    assert_eq!(report.unreadable_files, 0);
    assert!(report.missing.is_empty());
}

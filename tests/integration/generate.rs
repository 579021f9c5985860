//! Static-site content generation

use s4a_dict::commands::generate::generate;
use s4a_dict::content::PageKind;

use super::helpers::{attribute_yaml, view_yaml, TestProject};

fn sample() -> TestProject {
    let test = TestProject::new();
    test.attribute(
        "gate-number.yaml",
        &attribute_yaml("ATTR-100", "Gate Number", "Manual"),
    )
    .attribute(
        "crew-manifest.yaml",
        &attribute_yaml("ATTR-101", "Crew Manifest", "Manual"),
    )
    .object(
        "Flight.yaml",
        "Name: Flight\nCoreAttributes:\n  - Gate Number\nSystemPerspectives:\n  Ground Handling:\n    RelevantAttributes:\n      - Gate Number\n  Crew Planning:\n    RelevantAttributes:\n      - Crew Manifest\n",
    )
    .view(
        "Airline_Dashboard.yaml",
        &view_yaml("Airline Dashboard", &["Gate Number"]),
    );
    test
}

#[test]
fn test_pages_for_every_record() {
    let test = sample();
    let mut seen = Vec::new();
    let report = generate(&test.project(), |page| seen.push(page.kind)).unwrap();

    assert_eq!(report.count(PageKind::Attribute), 2);
    assert_eq!(report.count(PageKind::Object), 1);
    assert_eq!(report.count(PageKind::View), 1);
    assert_eq!(report.count(PageKind::Perspective), 2);
    assert_eq!(report.total(), 6);
    assert_eq!(seen.len(), 6);

    assert!(test.exists("content/attributes/gate-number.md"));
    assert!(test.exists("content/objects/flight.md"));
    assert!(test.exists("content/views/Airline_Dashboard.md"));
    assert!(test.exists("content/perspectives/flight-ground-handling.md"));
    assert!(test.exists("content/perspectives/flight-crew-planning.md"));
}

#[test]
fn test_attribute_page_carries_provenance() {
    let test = sample();
    generate(&test.project(), |_| {}).unwrap();

    let page = test.read("content/attributes/gate-number.md");
    assert!(page.starts_with("---\n"));
    assert!(page.ends_with("---\n"));
    assert!(page.contains("title: Gate Number"));
    assert!(page.contains("id: ATTR-100"));
    assert!(page.contains("dataType: String"));
    assert!(page.contains("sourceSystem: Airport BMS / Tower"));
    assert!(page.contains("refreshRate: Real-time"));
}

#[test]
fn test_object_view_and_perspective_front_matter() {
    let test = sample();
    generate(&test.project(), |_| {}).unwrap();

    let object = test.read("content/objects/flight.md");
    assert!(object.contains("title: Flight"));
    assert!(object.contains("Definition of the Flight business object."));

    let view = test.read("content/views/Airline_Dashboard.md");
    assert!(view.contains("title: Airline Dashboard"));

    let perspective = test.read("content/perspectives/flight-ground-handling.md");
    assert!(perspective.contains("title: Ground Handling"));
    assert!(perspective.contains("object_id: Flight"));
    assert!(perspective.contains("perspective_id: Ground Handling"));
}

#[test]
fn test_malformed_file_aborts_generation() {
    let test = sample();
    test.object("Broken.yaml", "Name: [unclosed\n");

    let err = generate(&test.project(), |_| {}).unwrap_err();
    assert!(format!("{err:#}").contains("Broken.yaml"));
}

#[test]
fn test_regeneration_overwrites_pages() {
    let test = sample();
    let project = test.project();
    generate(&project, |_| {}).unwrap();

    test.attribute(
        "gate-number.yaml",
        &attribute_yaml("ATTR-100", "Boarding Gate", "Manual"),
    );
    generate(&project, |_| {}).unwrap();

    assert!(test
        .read("content/attributes/gate-number.md")
        .contains("title: Boarding Gate"));
}

#[test]
fn test_unusual_constraint_types_do_not_abort_generation() {
    let test = sample();
    test.attribute(
        "operating-mode.yaml",
        "id: ATTR-102\nname: Operating Mode\nsource: Manual\nvalues: [Normal, Closed]\nprecision: 2.5\n",
    );

    let report = generate(&test.project(), |_| {}).unwrap();
    assert_eq!(report.count(PageKind::Attribute), 3);
    assert!(test
        .read("content/attributes/operating-mode.md")
        .contains("id: ATTR-102"));
}

#[test]
fn test_blank_name_uses_stem_for_provenance() {
    let test = TestProject::new();
    test.attribute("gate-number.yaml", "id: ATTR-100\nname: \"\"\n");

    generate(&test.project(), |_| {}).unwrap();
    let page = test.read("content/attributes/gate-number.md");
    assert!(page.contains("title: gate-number"));
    assert!(page.contains("sourceSystem: Airport BMS / Tower"));
}

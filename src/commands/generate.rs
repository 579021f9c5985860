//! `generate`: write the static-site content pages.

use anyhow::Result;
use colored::Colorize;

use super::common::{print_header, print_rule};
use crate::config::Project;
use crate::content::{ContentGenerator, ContentReport, GeneratedPage, PageKind, ProvenanceTable};

/// Generate every page with the built-in provenance table
pub fn generate(project: &Project, on_page: impl FnMut(&GeneratedPage)) -> Result<ContentReport> {
    let provenance = ProvenanceTable::builtin();
    ContentGenerator::new(&project.layout, &provenance).generate(on_page)
}

pub fn execute(project: &Project) -> Result<()> {
    print_header("Content Generation");

    let root = project.root();
    let report = generate(project, |page| {
        let shown = page.path.strip_prefix(root).unwrap_or(&page.path);
        println!(
            "{} Generated {} {}",
            "✓".green(),
            shown.display(),
            format!("(from {})", page.origin).dimmed()
        );
    })?;

    print_rule();
    for kind in [
        PageKind::Attribute,
        PageKind::Object,
        PageKind::View,
        PageKind::Perspective,
    ] {
        println!("  {:<14} {}", kind.dir_name(), report.count(kind));
    }
    println!(
        "{} Content generation complete: {} pages.",
        "✓".green().bold(),
        report.total()
    );

    Ok(())
}

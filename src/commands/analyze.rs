//! `analyze`: report attribute names that are used but never defined.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::common::{print_header, print_unreadable, print_rule};
use crate::config::Project;
use crate::names::title_case;
use crate::reconcile::{collect_references, defined_names, find_gaps, Gap};
use crate::store::Corpus;

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub defined: usize,
    pub referenced: usize,
    pub missing: Vec<Gap>,
    pub unreadable_files: usize,
}

pub fn analyze(corpus: &Corpus) -> AnalysisReport {
    let defined = defined_names(&corpus.attributes);
    let references = collect_references(&corpus.objects, &corpus.views);
    let missing = find_gaps(&defined, &references);

    AnalysisReport {
        defined: defined.len(),
        referenced: references.len(),
        missing,
        unreadable_files: corpus.diagnostics.len(),
    }
}

pub fn execute(project: &Project, json: bool) -> Result<()> {
    let corpus = Corpus::load(&project.layout);
    let report = analyze(&corpus);

    if json {
        let out =
            serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?;
        println!("{out}");
        return Ok(());
    }

    print_header("Missing Attributes Analysis");
    println!(
        "{} Found {} existing attribute definitions.",
        "✓".green(),
        report.defined
    );
    print_unreadable(report.unreadable_files);

    println!(
        "\n{} Missing attributes (used but not defined in {}):",
        "✗".red(),
        project.config.paths.attributes.display()
    );
    print_rule();

    for gap in &report.missing {
        println!(
            "  • {} {}",
            title_case(&gap.key).cyan(),
            format!("(used in: {})", gap.site_summary()).dimmed()
        );
    }

    print_rule();
    println!("Total missing attributes: {}", report.missing.len());

    Ok(())
}

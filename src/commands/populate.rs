//! `populate`: promote auto-generated records using the inference rules.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

use super::common::{print_header, print_rule, print_unreadable};
use crate::config::Project;
use crate::inference::{MatchTier, RuleTable};
use crate::materialize::{promote, write_record, Promotion};
use crate::models::AttributeRecord;
use crate::store::{load_documents, Diagnostics, YAML_EXTENSION};

#[derive(Debug, Clone)]
pub struct PopulatedRecord {
    pub path: PathBuf,
    pub tier: MatchTier,
    pub matched: String,
}

#[derive(Debug, Default)]
pub struct PopulateReport {
    pub updated: Vec<PopulatedRecord>,
    /// Auto-generated records no rule could say anything about
    pub unmatched: Vec<PathBuf>,
    /// Curated or already inferred
    pub not_eligible: usize,
    pub failed: Vec<(PathBuf, String)>,
    pub diagnostics: Diagnostics,
}

/// Plan every promotion first, then write them.
pub fn populate(project: &Project, rules: &RuleTable, dry_run: bool) -> PopulateReport {
    let mut report = PopulateReport::default();
    let documents = load_documents::<AttributeRecord>(
        &project.layout.attributes_dir,
        YAML_EXTENSION,
        &mut report.diagnostics,
    );

    let mut pending = Vec::new();
    for doc in &documents {
        let key = doc.stem.to_lowercase();
        match promote(&doc.body, &key, rules) {
            Promotion::NotEligible => report.not_eligible += 1,
            Promotion::NoRuleMatched => report.unmatched.push(doc.path.clone()),
            Promotion::Promoted { record, inference } => pending.push((
                doc.path.clone(),
                record,
                PopulatedRecord {
                    path: doc.path.clone(),
                    tier: inference.tier,
                    matched: inference.matched.to_string(),
                },
            )),
        }
    }

    for (path, record, populated) in pending {
        if !dry_run {
            if let Err(e) = write_record(&path, &record) {
                warn!("{e:#}");
                report.failed.push((path, format!("{e:#}")));
                continue;
            }
        }
        report.updated.push(populated);
    }

    report
}

pub fn execute(project: &Project, dry_run: bool) -> Result<()> {
    print_header("Populating Attributes with Sample Data");

    let rules = RuleTable::builtin();
    let report = populate(project, &rules, dry_run);
    let verb = if dry_run { "Would update" } else { "Updated" };

    for populated in &report.updated {
        let how = match populated.tier {
            MatchTier::Exact => "exact".to_string(),
            MatchTier::Keyword => format!("keyword '{}'", populated.matched),
        };
        println!(
            "{} {verb} {} {}",
            "✓".green(),
            display_file(&populated.path).cyan(),
            format!("({how})").dimmed()
        );
    }

    for path in &report.unmatched {
        println!(
            "{} No rule matched for {}, skipping update.",
            "⚠".yellow(),
            display_file(path)
        );
    }

    for (path, error) in &report.failed {
        println!("{} Failed to update {}: {}", "✗".red(), display_file(path), error);
    }

    print_rule();
    print_unreadable(report.diagnostics.len());
    println!(
        "{verb} {} attribute files with sample data.",
        report.updated.len()
    );

    Ok(())
}

fn display_file(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

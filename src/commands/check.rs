//! `check`: read-only integrity report over the whole corpus.
//!
//! Nothing here writes files, and findings never change the exit code.

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::common::{print_header, print_rule, print_unreadable};
use crate::config::{IdScheme, Project};
use crate::reconcile::{collect_references, defined_names, find_gaps, Gap};
use crate::store::Corpus;

#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub records: usize,
    /// Identifier -> files declaring it, only where more than one does
    pub duplicate_ids: BTreeMap<String, Vec<PathBuf>>,
    /// Canonical name -> files declaring it, only where more than one does
    pub duplicate_names: BTreeMap<String, Vec<PathBuf>>,
    pub missing_ids: Vec<PathBuf>,
    /// Records whose identifier does not follow the configured scheme
    pub malformed_ids: Vec<(PathBuf, String)>,
    pub undefined: Vec<Gap>,
    /// Defined names nothing refers to, as written in the record
    pub unreferenced: Vec<String>,
    pub unreadable_files: usize,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.duplicate_names.is_empty()
            && self.missing_ids.is_empty()
            && self.malformed_ids.is_empty()
            && self.undefined.is_empty()
            && self.unreadable_files == 0
    }
}

/// `^PREFIX-\d{width,}$` for the given scheme
pub fn id_pattern(scheme: &IdScheme) -> Result<Regex> {
    let pattern = format!(r"^{}-\d{{{},}}$", regex::escape(&scheme.prefix), scheme.width);
    Regex::new(&pattern).with_context(|| format!("Invalid identifier pattern: {pattern}"))
}

pub fn check(project: &Project) -> Result<IntegrityReport> {
    let corpus = Corpus::load(&project.layout);
    let pattern = id_pattern(&project.config.identifiers)?;

    let mut report = IntegrityReport {
        records: corpus.attributes.len(),
        unreadable_files: corpus.diagnostics.len(),
        ..Default::default()
    };

    let mut by_id: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    let mut by_name: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for doc in &corpus.attributes {
        let id = doc.body.id.trim();
        if id.is_empty() {
            report.missing_ids.push(doc.path.clone());
        } else {
            if !pattern.is_match(id) {
                report.malformed_ids.push((doc.path.clone(), id.to_string()));
            }
            by_id.entry(id.to_string()).or_default().push(doc.path.clone());
        }

        if let Some(key) = doc.body.canonical_name() {
            by_name.entry(key).or_default().push(doc.path.clone());
        }
    }

    report.duplicate_ids = by_id.into_iter().filter(|(_, files)| files.len() > 1).collect();
    report.duplicate_names = by_name
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .collect();

    let defined = defined_names(&corpus.attributes);
    let references = collect_references(&corpus.objects, &corpus.views);
    report.undefined = find_gaps(&defined, &references);

    let mut unreferenced: BTreeMap<String, String> = BTreeMap::new();
    for doc in &corpus.attributes {
        if let Some(key) = doc.body.canonical_name() {
            if !references.contains(&key) {
                unreferenced
                    .entry(key)
                    .or_insert_with(|| doc.body.name.trim().to_string());
            }
        }
    }
    report.unreferenced = unreferenced.into_values().collect();

    Ok(report)
}

pub fn execute(project: &Project) -> Result<()> {
    print_header("Integrity Check");

    let corpus_root = project.root();
    let report = check(project)?;
    let show = |path: &Path| path.strip_prefix(corpus_root).unwrap_or(path).display().to_string();

    println!(
        "{} Checked {} attribute definitions.",
        "ℹ".blue(),
        report.records
    );

    for (id, files) in &report.duplicate_ids {
        let files: Vec<String> = files.iter().map(|p| show(p)).collect();
        println!(
            "{} Duplicate id {}: {}",
            "✗".red(),
            id.bold(),
            files.join(", ")
        );
    }

    for (name, files) in &report.duplicate_names {
        let files: Vec<String> = files.iter().map(|p| show(p)).collect();
        println!(
            "{} Duplicate name '{}': {}",
            "✗".red(),
            name,
            files.join(", ")
        );
    }

    for path in &report.missing_ids {
        println!("{} Missing id: {}", "✗".red(), show(path));
    }

    for (path, id) in &report.malformed_ids {
        println!(
            "{} Id {} in {} does not match {}-{}",
            "⚠".yellow(),
            id,
            show(path),
            project.config.identifiers.prefix,
            "0".repeat(project.config.identifiers.width)
        );
    }

    for gap in &report.undefined {
        println!(
            "{} Undefined attribute '{}' {}",
            "✗".red(),
            gap.display,
            format!("(used in: {})", gap.site_summary()).dimmed()
        );
    }

    for name in &report.unreferenced {
        println!("{} Unreferenced attribute '{}'", "ℹ".blue(), name);
    }

    print_rule();
    print_unreadable(report.unreadable_files);
    if report.is_clean() {
        println!("{} No integrity problems found.", "✓".green().bold());
    } else {
        println!(
            "{} duplicate ids, {} duplicate names, {} missing ids, {} malformed ids, {} undefined attributes",
            report.duplicate_ids.len(),
            report.duplicate_names.len(),
            report.missing_ids.len(),
            report.malformed_ids.len(),
            report.undefined.len()
        );
    }

    Ok(())
}

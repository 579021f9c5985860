//! `scaffold`: create placeholder records for every missing attribute.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use super::common::{print_header, print_rule, print_unreadable};
use crate::config::Project;
use crate::materialize::{create, record_path, write_record};
use crate::reconcile::{collect_references, defined_names, find_gaps, IdAllocator};
use crate::store::Corpus;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRecord {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Name has no characters usable in a file name
    NoSlug,
    /// A different record already occupies the slug's file
    FileExists(PathBuf),
    /// The identifier scheme has no numbers left
    NoIdentifier,
    WriteFailed(String),
}

#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub created: Vec<CreatedRecord>,
    pub skipped: Vec<(String, SkipReason)>,
    pub unreadable_files: usize,
}

/// Create one draft record per referenced-but-undefined canonical name.
///
/// Names are processed in canonical order, so identifiers are assigned
/// deterministically. Existing files are never overwritten. With
/// `dry_run`, nothing is written but the report is the same.
pub fn scaffold(project: &Project, dry_run: bool) -> Result<ScaffoldReport> {
    let layout = &project.layout;
    let corpus = Corpus::load(layout);

    let defined = defined_names(&corpus.attributes);
    let references = collect_references(&corpus.objects, &corpus.views);
    let gaps = find_gaps(&defined, &references);

    let used_ids = corpus
        .attributes
        .iter()
        .map(|doc| doc.body.id.clone())
        .filter(|id| !id.is_empty());
    let mut ids = IdAllocator::new(project.config.identifiers.clone(), used_ids);

    if !dry_run && !gaps.is_empty() {
        fs::create_dir_all(&layout.attributes_dir).with_context(|| {
            format!("Failed to create {}", layout.attributes_dir.display())
        })?;
    }

    let mut report = ScaffoldReport {
        unreadable_files: corpus.diagnostics.len(),
        ..Default::default()
    };
    let mut planned: HashSet<PathBuf> = HashSet::new();

    for gap in gaps {
        let Some(path) = record_path(&layout.attributes_dir, &gap.display) else {
            warn!(name = %gap.display, "name has no usable file name, skipping");
            report.skipped.push((gap.display, SkipReason::NoSlug));
            continue;
        };

        if path.exists() || planned.contains(&path) {
            warn!(name = %gap.display, path = %path.display(), "file already exists, skipping");
            report.skipped.push((gap.display, SkipReason::FileExists(path)));
            continue;
        }

        let Some(id) = ids.allocate() else {
            warn!(name = %gap.display, "no identifiers left in the configured scheme, skipping");
            report.skipped.push((gap.display, SkipReason::NoIdentifier));
            continue;
        };
        let record = create(&gap.display, id);

        if !dry_run {
            if let Err(e) = write_record(&path, &record) {
                warn!("{e:#}");
                report
                    .skipped
                    .push((gap.display, SkipReason::WriteFailed(format!("{e:#}"))));
                continue;
            }
        }

        info!(id = %record.id, path = %path.display(), "created attribute");
        planned.insert(path.clone());
        report.created.push(CreatedRecord {
            id: record.id,
            name: record.name,
            path,
        });
    }

    Ok(report)
}

pub fn execute(project: &Project, dry_run: bool) -> Result<()> {
    print_header("Scaffolding Missing Attributes");

    let report = scaffold(project, dry_run)?;
    let verb = if dry_run { "Would create" } else { "Created" };

    for created in &report.created {
        let file = created
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("{} {verb} {} ({})", "✓".green(), file.cyan(), created.id);
    }

    for (name, reason) in &report.skipped {
        let why = match reason {
            SkipReason::NoSlug => "no usable file name".to_string(),
            SkipReason::FileExists(path) => format!("{} already exists", path.display()),
            SkipReason::NoIdentifier => "no identifiers left".to_string(),
            SkipReason::WriteFailed(e) => e.clone(),
        };
        println!("{} Skipped '{}': {}", "⚠".yellow(), name, why);
    }

    print_rule();
    print_unreadable(report.unreadable_files);
    println!("{verb} {} new attribute files.", report.created.len());

    Ok(())
}

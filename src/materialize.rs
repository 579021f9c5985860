//! Creating and promoting attribute records on disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::inference::{Inference, RuleTable, SchemaFragment};
use crate::models::{AttributeRecord, DataType, Source, Status};
use crate::names::slugify;
use crate::store::YAML_EXTENSION;

/// Placeholder record for a referenced-but-undefined name
pub fn create(name: &str, id: String) -> AttributeRecord {
    AttributeRecord {
        id,
        name: name.to_string(),
        description: format!("Attribute representing {name}."),
        data_type: DataType::String,
        source: Some(Source::AutoGenerated),
        status: Some(Status::Draft),
        ..Default::default()
    }
}

/// File a record for `name` is stored in, `None` if the name has no slug
pub fn record_path(attributes_dir: &Path, name: &str) -> Option<PathBuf> {
    let slug = slugify(name);
    (!slug.is_empty()).then(|| attributes_dir.join(format!("{slug}.{YAML_EXTENSION}")))
}

/// Rewrite the whole file with `record`
pub fn write_record(path: &Path, record: &AttributeRecord) -> Result<()> {
    let content = serde_yaml::to_string(record)
        .with_context(|| format!("Failed to serialize {}", record.id))?;

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Overlay `fragment` onto a copy of `existing` and mark it inferred.
///
/// `id` and `name` always come from `existing`.
pub fn apply_inference(existing: &AttributeRecord, fragment: &SchemaFragment) -> AttributeRecord {
    let mut updated = existing.clone();
    updated.status = Some(Status::Active);
    updated.source = Some(Source::Inferred);

    fragment.apply_to(&mut updated);
    updated.release_shadowed_extras();

    updated.id = existing.id.clone();
    updated.name = existing.name.clone();
    updated
}

/// What population decided for one record
#[derive(Debug)]
pub enum Promotion<'a> {
    /// Not `Auto-generated`; curated or already inferred
    NotEligible,
    NoRuleMatched,
    Promoted {
        record: AttributeRecord,
        inference: Inference<'a>,
    },
}

/// One-shot promotion of an auto-generated record using `rules`.
///
/// `key` is the lowercased lookup key (the record's file stem).
pub fn promote<'a>(existing: &AttributeRecord, key: &str, rules: &'a RuleTable) -> Promotion<'a> {
    if !existing.is_auto_generated() {
        return Promotion::NotEligible;
    }

    match rules.infer(key) {
        Some(inference) => Promotion::Promoted {
            record: apply_inference(existing, inference.fragment),
            inference,
        },
        None => Promotion::NoRuleMatched,
    }
}

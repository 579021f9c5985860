//! Schema inference from attribute names.
//!
//! Two tiers: an exact lookup on the canonical key, then an ordered list of
//! keyword rules where the first rule with a keyword contained in the key
//! wins. Table order is priority order, so the keyword tier stays a list.

mod fragment;
mod rules;

pub use fragment::SchemaFragment;
pub use rules::{ExactRule, KeywordRule};

use crate::names::first_keyword_match;

/// Which tier produced an inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Keyword,
}

/// A successful rule lookup
#[derive(Debug, Clone, Copy)]
pub struct Inference<'a> {
    pub tier: MatchTier,
    /// Exact key or the keyword that hit
    pub matched: &'a str,
    pub fragment: &'a SchemaFragment,
}

/// Ordered exact and keyword rules
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    exact: Vec<ExactRule>,
    keywords: Vec<KeywordRule>,
}

impl RuleTable {
    pub fn new(exact: Vec<ExactRule>, keywords: Vec<KeywordRule>) -> Self {
        Self { exact, keywords }
    }

    /// Rules for the airline operations dictionary
    pub fn builtin() -> Self {
        Self::new(rules::builtin_exact(), rules::builtin_keywords())
    }

    pub fn exact_rules(&self) -> &[ExactRule] {
        &self.exact
    }

    pub fn keyword_rules(&self) -> &[KeywordRule] {
        &self.keywords
    }

    /// Look up `key` (already lowercased). `None` means nothing is inferable.
    pub fn infer(&self, key: &str) -> Option<Inference<'_>> {
        if let Some(rule) = self.exact.iter().find(|rule| rule.key == key) {
            return Some(Inference {
                tier: MatchTier::Exact,
                matched: rule.key,
                fragment: &rule.fragment,
            });
        }

        first_keyword_match(
            key,
            self.keywords
                .iter()
                .map(|rule| (rule.keywords, &rule.fragment)),
        )
        .map(|(matched, fragment)| Inference {
            tier: MatchTier::Keyword,
            matched,
            fragment,
        })
    }
}

//! Reference reconciliation: what is used, what is defined, what is missing.

pub mod gaps;
pub mod ids;
pub mod references;

pub use gaps::{defined_names, find_gaps, missing_names, Gap, SiteSummary, SITE_PREVIEW_LIMIT};
pub use ids::IdAllocator;
pub use references::{collect_references, ReferenceMap, ReferenceSite, ReferencedName};

//! The pure classification-and-aggregation pipeline.
//!
//! Every function in this module is deterministic and side-effect-free:
//! raw commit subjects, file paths, and diff stats go in, a classification,
//! categorized buckets, a complexity report, and suggestions come out.

pub mod categorize;
pub mod classify;
pub mod complexity;
pub mod suggest;

pub use categorize::{categorize, FileCategories, FileCategory};
pub use classify::{classify, PrType};
pub use complexity::{analyze, ComplexityReport, FileStat, Tier};
pub use suggest::suggestions;

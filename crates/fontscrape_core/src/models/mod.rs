//! Data models shared by the font library and the subtitle extractor.
//!
//! - Font records built from font file metadata
//! - Font requirements extracted from subtitle scripts
//! - Match results and their ranking

mod font;
mod requirement;
mod result;

pub use font::{Font, FontMetadata};
pub use requirement::{FontRequirement, RequirementOrigin, StyleAttribute, Subfamily};
pub use result::{best_result, compare_results, sort_descending, FontResult};

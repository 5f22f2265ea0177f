//! Dedupe core business logic

pub mod engine;
pub mod grouper;
pub mod merger;

pub use engine::MergeEngine;
pub use grouper::{find_duplicates, match_fields};
pub use merger::merge_group;

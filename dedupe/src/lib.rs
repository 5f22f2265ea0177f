//! Duplicate merge engine for a remote CRM
//!
//! Fetches person and organization records from a Pipedrive-compatible
//! API, groups candidate duplicates by an exact match-field value, and
//! merges each group into its most recently updated record via the remote
//! merge endpoint. The HTTP surface lives in the webserver crate; this
//! crate is the engine plus its remote-store client.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::CrmConfig;
pub use core::{find_duplicates, match_fields, merge_group, MergeEngine};
pub use error::{DedupeError, DedupeResult};
pub use services::RealRecordStore;
pub use traits::RecordStore;
pub use types::*;

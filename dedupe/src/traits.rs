//! Trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::DedupeResult;
use crate::types::{EntityKind, Record};

/// Remote record store the engine fetches from and merges against
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records of a kind
    async fn list(&self, kind: EntityKind) -> DedupeResult<Vec<Record>>;

    /// Merge the duplicate record into the survivor, server-side
    async fn merge(
        &self,
        kind: EntityKind,
        duplicate_id: u64,
        survivor_id: u64,
    ) -> DedupeResult<()>;
}

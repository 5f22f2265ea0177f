//! Merge engine
//!
//! Thin orchestration over the remote store: fetch all records of a kind,
//! group candidate duplicates, drive the merges, report what happened. A
//! fetch failure aborts the whole operation; a per-merge failure only
//! affects that one call.

use tracing::info;

use crate::core::grouper::find_duplicates;
use crate::core::merger::merge_group;
use crate::error::DedupeResult;
use crate::traits::RecordStore;
use crate::types::{EntityKind, GroupReport, MergeReport};

/// Duplicate merge engine over an injected record store
pub struct MergeEngine<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> MergeEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The injected record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one merge operation: fetch, group, merge, report.
    ///
    /// Records are fetched fresh on every call; nothing is cached between
    /// invocations. Concurrent invocations therefore work on independent
    /// snapshots and may race at the remote store.
    pub async fn run_merge(&self, kind: &str, match_field: &str) -> DedupeResult<MergeReport> {
        let kind: EntityKind = kind.parse()?;

        let records = self.store.list(kind).await?;
        info!("📋 Fetched {} {kind} from the remote store", records.len());

        let groups = find_duplicates(&records, kind, match_field);
        info!(
            "📋 Found {} duplicate group(s) for {kind} by '{match_field}'",
            groups.len()
        );

        // Key-sorted order keeps logs and reports deterministic.
        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut reports = Vec::with_capacity(groups.len());
        for (match_key, members) in groups {
            let survivor_id = members[0].id;
            let duplicate_ids: Vec<u64> = members[1..].iter().map(|r| r.id).collect();

            let outcomes = merge_group(&self.store, kind, survivor_id, &duplicate_ids).await;
            reports.push(GroupReport {
                match_key,
                survivor_id,
                outcomes,
            });
        }

        Ok(MergeReport::new(kind, match_field, reports))
    }
}

//! Merge driving
//!
//! Issues one remote merge call per duplicate, strictly sequentially. A
//! failed call is recorded and logged but never stops the rest of the
//! group; the remote API owns field-level conflict resolution.

use tracing::{info, warn};

use crate::traits::RecordStore;
use crate::types::{EntityKind, MergeOutcome};

/// Merge every duplicate into the survivor, one call at a time.
///
/// Returns one outcome per duplicate, in the order they were attempted.
pub async fn merge_group<S>(
    store: &S,
    kind: EntityKind,
    survivor_id: u64,
    duplicate_ids: &[u64],
) -> Vec<MergeOutcome>
where
    S: RecordStore + ?Sized,
{
    let mut outcomes = Vec::with_capacity(duplicate_ids.len());

    for &duplicate_id in duplicate_ids {
        match store.merge(kind, duplicate_id, survivor_id).await {
            Ok(()) => {
                info!("✅ Merged {kind} {duplicate_id} into {survivor_id}");
                outcomes.push(MergeOutcome::success(duplicate_id));
            }
            Err(error) => {
                warn!("❌ Failed to merge {kind} {duplicate_id} into {survivor_id}: {error}");
                outcomes.push(MergeOutcome::failure(duplicate_id, error.to_string()));
            }
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DedupeError;
    use crate::traits::MockRecordStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn merges_every_duplicate_into_the_survivor_in_order() {
        let mut store = MockRecordStore::new();
        let mut sequence = mockall::Sequence::new();

        for duplicate_id in [2u64, 3, 4] {
            store
                .expect_merge()
                .with(eq(EntityKind::Persons), eq(duplicate_id), eq(1u64))
                .times(1)
                .in_sequence(&mut sequence)
                .returning(|_, _, _| Ok(()));
        }

        let outcomes = merge_group(&store, EntityKind::Persons, 1, &[2, 3, 4]).await;
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.merged));
        assert_eq!(
            outcomes.iter().map(|o| o.duplicate_id).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[tokio::test]
    async fn a_failed_merge_does_not_stop_the_rest_of_the_group() {
        let mut store = MockRecordStore::new();

        store
            .expect_merge()
            .with(eq(EntityKind::Organizations), eq(6u64), eq(5u64))
            .times(1)
            .returning(|kind, duplicate_id, _| {
                Err(DedupeError::MergeFailed {
                    kind,
                    duplicate_id,
                    message: "409 Conflict".to_string(),
                })
            });
        store
            .expect_merge()
            .with(eq(EntityKind::Organizations), eq(7u64), eq(5u64))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let outcomes = merge_group(&store, EntityKind::Organizations, 5, &[6, 7]).await;

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].merged);
        assert!(outcomes[0].error.as_deref().unwrap().contains("409"));
        assert!(outcomes[1].merged);
    }

    #[tokio::test]
    async fn empty_duplicate_list_makes_no_calls() {
        let mut store = MockRecordStore::new();
        store.expect_merge().times(0);

        let outcomes = merge_group(&store, EntityKind::Persons, 1, &[]).await;
        assert!(outcomes.is_empty());
    }
}

//! Duplicate grouping
//!
//! Partitions a flat record set into groups sharing a match-field value,
//! ordered most-recent first. Which fields are matchable is a static
//! mapping per entity kind, so adding a field is a data change here rather
//! than a branch in the engine.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::types::{ContactValue, EntityKind, Record};

/// Extracts the raw sub-values of one match field from a record
type Extractor = fn(&Record) -> Vec<ContactValue>;

/// Static mapping from (entity kind, field name) to its extractor.
///
/// Unknown fields have no extractor; grouping then yields nothing rather
/// than erroring, matching the remote API's tolerance for odd input.
fn extractor_for(kind: EntityKind, field: &str) -> Option<Extractor> {
    match (kind, field) {
        (EntityKind::Persons, "email") => Some(|r| r.email.clone().unwrap_or_default()),
        (EntityKind::Persons, "phone") => Some(|r| r.phone.clone().unwrap_or_default()),
        (EntityKind::Persons, "name") => {
            Some(|r| r.name.clone().map(ContactValue::Plain).into_iter().collect())
        }
        (EntityKind::Organizations, "name") => {
            Some(|r| r.name.clone().map(ContactValue::Plain).into_iter().collect())
        }
        (EntityKind::Organizations, "address") => {
            Some(|r| vec![ContactValue::Plain(r.address.clone().unwrap_or_default())])
        }
        _ => None,
    }
}

/// Field names matchable for a kind, in UI presentation order
pub fn match_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Persons => &["email", "name", "phone"],
        EntityKind::Organizations => &["name", "address"],
    }
}

/// Group records by the exact string value of `match_field`.
///
/// Each returned group has at least two members and is sorted descending by
/// effective timestamp, so the first member is the merge survivor. A record
/// contributes one group membership per matching sub-value: two identical
/// sub-values push it twice into the same group, two distinct ones put it
/// in two groups.
pub fn find_duplicates(
    records: &[Record],
    kind: EntityKind,
    match_field: &str,
) -> HashMap<String, Vec<Record>> {
    let Some(extract) = extractor_for(kind, match_field) else {
        debug!("no extractor for {kind} field '{match_field}', nothing to group");
        return HashMap::new();
    };

    let mut groups: HashMap<String, Vec<Record>> = HashMap::new();
    for record in records {
        for value in extract(record) {
            if let Some(key) = value.effective() {
                groups.entry(key.to_string()).or_default().push(record.clone());
            }
        }
    }

    for members in groups.values_mut() {
        members.sort_by(compare_recency);
    }
    groups.retain(|_, members| members.len() > 1);
    groups
}

/// Descending by effective timestamp; missing/unparseable timestamps sort
/// last; ties break ascending by id.
fn compare_recency(a: &Record, b: &Record) -> Ordering {
    match (a.effective_timestamp(), b.effective_timestamp()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

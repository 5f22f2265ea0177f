//! Core data types for the duplicate merge engine

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of CRM record a merge operation works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Persons,
    Organizations,
}

impl EntityKind {
    /// Collection path segment used by the remote API
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Persons => "persons",
            EntityKind::Organizations => "organizations",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.collection()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::error::DedupeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "persons" => Ok(EntityKind::Persons),
            "organizations" => Ok(EntityKind::Organizations),
            other => Err(crate::error::DedupeError::InvalidEntityKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A single entry of a multi-valued contact field.
///
/// The remote API represents these either as bare strings or as objects
/// carrying the string under `value` alongside label/primary metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactValue {
    Plain(String),
    Detailed(ContactDetail),
}

/// Object-wrapped contact entry (`{"value": "...", "label": "work", ...}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub primary: Option<bool>,
}

impl ContactValue {
    /// The string this entry contributes as a match key.
    ///
    /// Empty and missing values never form a group.
    pub fn effective(&self) -> Option<&str> {
        let raw = match self {
            ContactValue::Plain(value) => Some(value.as_str()),
            ContactValue::Detailed(detail) => detail.value.as_deref(),
        };
        raw.filter(|value| !value.is_empty())
    }
}

impl From<&str> for ContactValue {
    fn from(value: &str) -> Self {
        ContactValue::Plain(value.to_string())
    }
}

/// A CRM record as returned by the remote list endpoint.
///
/// Only the fields the engine matches and sorts on are modeled; the remote
/// store owns everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<Vec<ContactValue>>,
    #[serde(default)]
    pub phone: Option<Vec<ContactValue>>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub add_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl Record {
    /// Recency used for survivor selection: `update_time` when present and
    /// non-empty, otherwise `add_time`.
    pub fn effective_timestamp(&self) -> Option<NaiveDateTime> {
        let raw = non_empty(self.update_time.as_deref()).or(non_empty(self.add_time.as_deref()))?;
        parse_timestamp(raw)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse the timestamp formats the remote API emits.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(ts);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.naive_utc())
}

/// Result of a single merge call against the remote store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub duplicate_id: u64,
    pub merged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MergeOutcome {
    pub fn success(duplicate_id: u64) -> Self {
        Self {
            duplicate_id,
            merged: true,
            error: None,
        }
    }

    pub fn failure(duplicate_id: u64, error: impl Into<String>) -> Self {
        Self {
            duplicate_id,
            merged: false,
            error: Some(error.into()),
        }
    }
}

/// Outcome of processing one duplicate group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub match_key: String,
    pub survivor_id: u64,
    pub outcomes: Vec<MergeOutcome>,
}

impl GroupReport {
    pub fn merges_succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.merged).count()
    }

    pub fn merges_failed(&self) -> usize {
        self.outcomes.len() - self.merges_succeeded()
    }
}

/// Aggregate report for one merge operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    pub message: String,
    pub entity_kind: EntityKind,
    pub match_field: String,
    pub groups_processed: usize,
    pub merges_attempted: usize,
    pub merges_succeeded: usize,
    pub merges_failed: usize,
    pub groups: Vec<GroupReport>,
}

impl MergeReport {
    pub fn new(kind: EntityKind, match_field: &str, groups: Vec<GroupReport>) -> Self {
        let merges_attempted = groups.iter().map(|g| g.outcomes.len()).sum();
        let merges_succeeded = groups.iter().map(|g| g.merges_succeeded()).sum();
        let merges_failed = groups.iter().map(|g| g.merges_failed()).sum();

        Self {
            message: "Merge successful".to_string(),
            entity_kind: kind,
            match_field: match_field.to_string(),
            groups_processed: groups.len(),
            merges_attempted,
            merges_succeeded,
            merges_failed,
            groups,
        }
    }
}

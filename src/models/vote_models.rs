use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteValue {
    Yes,
    Maybe,
    No,
}

/// Cosmetic class choice on the voting page. Never affects behavior.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerClass {
    Wizard,
    Fighter,
    Rogue,
}

/// One participant's answers for one campaign, keyed by
/// `(campaign_id, player_name)`. The name string is the whole identity; two
/// people picking the same name are indistinguishable, by design. A session
/// id missing from `availability` means "no response yet".
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VoteRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub campaign_id: ObjectId,
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_class: Option<PlayerClass>,
    pub availability: HashMap<String, VoteValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Merges one new answer into a participant's availability map, preserving
/// every other session's prior answer.
pub fn merge_availability(
    existing: &HashMap<String, VoteValue>,
    session_id: &str,
    value: VoteValue,
) -> HashMap<String, VoteValue> {
    let mut merged = existing.clone();
    merged.insert(session_id.to_string(), value);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_accumulate_across_sessions() {
        // Alice votes yes on S1, then maybe on S2.
        let first = merge_availability(&HashMap::new(), "S1", VoteValue::Yes);
        assert_eq!(first.len(), 1);
        assert_eq!(first.get("S1"), Some(&VoteValue::Yes));

        let second = merge_availability(&first, "S2", VoteValue::Maybe);
        assert_eq!(second.len(), 2);
        assert_eq!(second.get("S1"), Some(&VoteValue::Yes));
        assert_eq!(second.get("S2"), Some(&VoteValue::Maybe));
    }

    #[test]
    fn resubmitting_a_session_overwrites_only_that_entry() {
        let mut existing = HashMap::new();
        existing.insert("S1".to_string(), VoteValue::Yes);
        existing.insert("S2".to_string(), VoteValue::Maybe);

        let merged = merge_availability(&existing, "S1", VoteValue::No);
        assert_eq!(merged.get("S1"), Some(&VoteValue::No));
        assert_eq!(merged.get("S2"), Some(&VoteValue::Maybe));
    }

    // Two rapid submissions from the same participant each read the record,
    // merge, and write back. If both read the same snapshot, the later write
    // silently drops the earlier one's answer. Documents the accepted
    // last-write-wins race; there is no locking to prevent it.
    #[test]
    fn concurrent_read_modify_write_loses_the_earlier_answer() {
        let snapshot: HashMap<String, VoteValue> = HashMap::new();

        let write_a = merge_availability(&snapshot, "S1", VoteValue::Yes);
        let write_b = merge_availability(&snapshot, "S2", VoteValue::No);

        // write_b lands second and becomes the stored record.
        assert_eq!(write_a.get("S1"), Some(&VoteValue::Yes));
        assert_eq!(write_b.get("S1"), None);
        assert_eq!(write_b.get("S2"), Some(&VoteValue::No));
    }
}

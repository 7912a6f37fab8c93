use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::vote_models::{PlayerClass, VoteValue};

#[derive(Deserialize, Debug)]
pub struct SubmitVoteRequest {
    pub player_name: String,
    #[serde(default)]
    pub player_class: Option<PlayerClass>,
    pub session_id: String,
    pub value: VoteValue,
}

#[derive(Serialize, Debug)]
pub struct VoteResponse {
    pub campaign_id: String,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_class: Option<PlayerClass>,
    pub availability: HashMap<String, VoteValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

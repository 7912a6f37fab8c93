use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};
use std::collections::HashMap;

use crate::controllers::vote_controllers::models::VoteResponse;
use crate::models::campaign_models::Campaign;
use crate::models::vote_models::VoteRecord;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn get_player_votes(
    Path((campaign_id, player_name)): Path<(String, String)>,
    State(state): State<AppState>,
) -> AppResult<Json<VoteResponse>> {
    let campaign_obj_id = ObjectId::parse_str(&campaign_id)
        .map_err(|_| AppError::NotFound("Campaign not found".to_string()))?;

    let campaign_coll = state.db.collection::<Campaign>("campaigns");
    let vote_coll = state.db.collection::<VoteRecord>("votes");

    let campaign = campaign_coll
        .find_one(doc! { "_id": campaign_obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

    let record = vote_coll
        .find_one(doc! { "campaign_id": campaign_obj_id, "player_name": &player_name })
        .await?;

    // A player with no record simply has no answers yet; that is not an
    // error, the page shows every session unanswered.
    let (player_class, availability, updated_at) = match record {
        Some(record) => {
            // Answers for session ids the campaign no longer carries are
            // stale weak references and are dropped from the view.
            let known: Vec<&str> = campaign.dates.iter().map(|s| s.id.as_str()).collect();
            let availability: HashMap<_, _> = record
                .availability
                .into_iter()
                .filter(|(session_id, _)| known.contains(&session_id.as_str()))
                .collect();
            (record.player_class, availability, Some(record.updated_at))
        }
        None => (None, HashMap::new(), None),
    };

    Ok(Json(VoteResponse {
        campaign_id,
        player_name,
        player_class,
        availability,
        updated_at,
    }))
}

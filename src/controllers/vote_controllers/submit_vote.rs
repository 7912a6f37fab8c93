use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId, to_bson};

use crate::controllers::vote_controllers::models::{SubmitVoteRequest, VoteResponse};
use crate::models::campaign_models::Campaign;
use crate::models::vote_models::{merge_availability, VoteRecord};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn submit_vote(
    Path(campaign_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<SubmitVoteRequest>,
) -> AppResult<Json<VoteResponse>> {
    let player_name = payload.player_name.trim().to_string();
    if player_name.is_empty() {
        return Err(AppError::ValidationError(
            "Player name is required".to_string(),
        ));
    }
    if payload.session_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Session id is required".to_string(),
        ));
    }

    let campaign_obj_id = ObjectId::parse_str(&campaign_id)
        .map_err(|_| AppError::NotFound("Campaign not found".to_string()))?;

    let campaign_coll = state.db.collection::<Campaign>("campaigns");
    let vote_coll = state.db.collection::<VoteRecord>("votes");

    campaign_coll
        .find_one(doc! { "_id": campaign_obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

    // Read-modify-write keyed on (campaign_id, player_name). Two rapid
    // submissions from the same player can both read the same snapshot here;
    // the later write wins and the earlier answer is lost. Accepted; there is
    // no locking to prevent it.
    let existing = vote_coll
        .find_one(doc! { "campaign_id": campaign_obj_id, "player_name": &player_name })
        .await?;

    let now = Utc::now();

    let record = match existing {
        Some(prev) => {
            let merged = merge_availability(&prev.availability, &payload.session_id, payload.value);
            let player_class = payload.player_class.or(prev.player_class);

            let mut set = doc! {
                "availability": to_bson(&merged)?,
                "updated_at": to_bson(&now)?,
            };
            if let Some(class) = player_class {
                set.insert("player_class", to_bson(&class)?);
            }

            vote_coll
                .update_one(doc! { "_id": prev.id }, doc! { "$set": set })
                .await?;

            VoteRecord {
                availability: merged,
                player_class,
                updated_at: now,
                ..prev
            }
        }
        None => {
            let record = VoteRecord {
                id: ObjectId::new(),
                campaign_id: campaign_obj_id,
                player_name: player_name.clone(),
                player_class: payload.player_class,
                availability: merge_availability(
                    &Default::default(),
                    &payload.session_id,
                    payload.value,
                ),
                created_at: now,
                updated_at: now,
            };
            vote_coll.insert_one(&record).await?;
            record
        }
    };

    // Remember the name for pre-fill on the next visit. Only after the write
    // succeeded; a failed vote must not change what the page pre-fills.
    state.name_cache.set(&campaign_id, &player_name);

    Ok(Json(VoteResponse {
        campaign_id,
        player_name: record.player_name,
        player_class: record.player_class,
        availability: record.availability,
        updated_at: Some(record.updated_at),
    }))
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};

use crate::controllers::campaign_controllers::models::{
    campaign_response, CampaignResponse, ViewQuery,
};
use crate::models::campaign_models::Campaign;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn get_campaign(
    Path(campaign_id): Path<String>,
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
) -> AppResult<Json<CampaignResponse>> {
    // An unparseable id can never resolve to a campaign.
    let obj_id = ObjectId::parse_str(&campaign_id)
        .map_err(|_| AppError::NotFound("Campaign not found".to_string()))?;

    let coll = state.db.collection::<Campaign>("campaigns");

    let campaign = coll
        .find_one(doc! { "_id": obj_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

    let remembered_player = state.name_cache.get(&campaign_id);

    Ok(Json(campaign_response(
        campaign,
        query.tz.as_deref(),
        remembered_player,
    )?))
}

use axum::{extract::State, Json};

use crate::controllers::campaign_controllers::models::{
    campaign_response, CampaignResponse, CreateCampaignRequest,
};
use crate::models::campaign_models::Campaign;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn create_campaign(
    State(state): State<AppState>,
    Json(payload): Json<CreateCampaignRequest>,
) -> AppResult<Json<CampaignResponse>> {
    let campaign = Campaign::assemble(
        &payload.title,
        &payload.dm_name,
        &payload.timezone,
        &payload.sessions,
    )?;

    let coll = state.db.collection::<Campaign>("campaigns");

    // The whole session batch lives inside the one campaign document, so
    // this single insert is atomic: no reader can ever observe a campaign
    // with zero sessions.
    coll.insert_one(&campaign).await?;

    Ok(Json(campaign_response(campaign, None, None)?))
}

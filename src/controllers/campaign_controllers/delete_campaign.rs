use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::json;

use crate::models::campaign_models::Campaign;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn delete_campaign(
    Path(campaign_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let obj_id = ObjectId::parse_str(&campaign_id)
        .map_err(|_| AppError::NotFound("Campaign not found".to_string()))?;

    let coll = state.db.collection::<Campaign>("campaigns");

    let result = coll.delete_one(doc! { "_id": obj_id }).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Campaign not found".to_string()));
    }

    // Vote records only hold the campaign id as a weak reference. They are
    // left in place; nothing can load them once the campaign resolves to
    // NotFound.
    Ok(Json(json!({ "deleted": true })))
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::campaign_controllers::{create_campaign, delete_campaign, get_campaign};
use crate::controllers::vote_controllers::{get_player_votes, submit_vote};
use crate::state::AppState;

pub fn campaign_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_campaign::create_campaign))
        .route(
            "/:campaignId",
            get(get_campaign::get_campaign).delete(delete_campaign::delete_campaign),
        )
        .route("/:campaignId/vote", post(submit_vote::submit_vote))
        .route(
            "/:campaignId/votes/:playerName",
            get(get_player_votes::get_player_votes),
        )
        .with_state(state)
}

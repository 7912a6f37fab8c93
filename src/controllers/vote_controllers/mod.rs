pub mod get_player_votes;
pub mod models;
pub mod submit_vote;

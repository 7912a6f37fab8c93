pub mod campaign_models;
pub mod vote_models;

pub mod campaign_controllers;
pub mod vote_controllers;

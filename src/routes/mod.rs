pub mod campaign_routes;

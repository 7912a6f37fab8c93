pub mod create_campaign;
pub mod delete_campaign;
pub mod get_campaign;
pub mod models;

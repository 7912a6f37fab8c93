use mongodb::Database;
use std::sync::Arc;

use crate::utils::name_cache::NameCache;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub name_cache: Arc<dyn NameCache>,
}

impl AppState {
    pub fn new(db: Arc<Database>, name_cache: Arc<dyn NameCache>) -> Self {
        Self { db, name_cache }
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

/// The device-local "last player name used on this campaign" store. In the
/// browser this lives in localStorage; the core only ever talks to it through
/// this trait so it stays a replaceable collaborator. It pre-fills identity on
/// return visits and is never authentication.
pub trait NameCache: Send + Sync {
    fn get(&self, campaign_id: &str) -> Option<String>;
    fn set(&self, campaign_id: &str, name: &str);
}

#[derive(Default)]
pub struct InMemoryNameCache {
    entries: Mutex<HashMap<String, String>>,
}

impl NameCache for InMemoryNameCache {
    fn get(&self, campaign_id: &str) -> Option<String> {
        self.entries.lock().ok()?.get(campaign_id).cloned()
    }

    fn set(&self, campaign_id: &str, name: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(campaign_id.to_string(), name.to_string());
        }
    }
}

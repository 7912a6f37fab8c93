use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::campaign_models::{Campaign, SlotInput};
use crate::utils::error::AppResult;
use crate::utils::timezone;

#[derive(Deserialize, Debug)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub dm_name: String,
    pub timezone: String,
    pub sessions: Vec<SlotInput>,
}

#[derive(Deserialize, Debug)]
pub struct ViewQuery {
    /// Viewer's IANA timezone; when present every session also carries its
    /// local wall-clock rendering for that zone.
    pub tz: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CampaignResponse {
    pub id: String,
    pub title: String,
    pub dm_name: String,
    pub timezone: String,
    pub sessions: Vec<SessionResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remembered_player: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub id: String,
    pub date_time: DateTime<Utc>,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_abbreviation: Option<String>,
}

pub fn campaign_response(
    campaign: Campaign,
    viewer_zone: Option<&str>,
    remembered_player: Option<String>,
) -> AppResult<CampaignResponse> {
    let mut sessions = Vec::with_capacity(campaign.dates.len());
    for slot in campaign.dates {
        let (local, local_abbreviation) = match viewer_zone {
            Some(zone) => {
                let display = timezone::utc_to_local(slot.date_time, zone)?;
                (Some(display.local), Some(display.abbreviation))
            }
            None => (None, None),
        };
        sessions.push(SessionResponse {
            id: slot.id,
            date_time: slot.date_time,
            timezone: slot.timezone,
            local,
            local_abbreviation,
        });
    }

    Ok(CampaignResponse {
        id: campaign.id.to_hex(),
        title: campaign.title,
        dm_name: campaign.dm_name,
        timezone: campaign.timezone,
        sessions,
        created_at: campaign.created_at,
        remembered_player,
    })
}

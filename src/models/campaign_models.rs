use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::{AppError, AppResult};
use crate::utils::timezone;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub dm_name: String,
    pub timezone: String,
    pub dates: Vec<SessionSlot>,
    pub created_at: DateTime<Utc>,
}

/// One proposed session. The instant is stored in UTC and never rescheduled;
/// `timezone` keeps the DM's zone the wall-clock input was entered in.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionSlot {
    pub id: String,
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    pub timezone: String,
}

/// One raw date/time pair from the create form. Both fields default to empty
/// so a half-filled row deserializes instead of failing the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotInput {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl Campaign {
    /// Builds a campaign from the DM's form input. Incomplete or unparseable
    /// date/time rows are dropped rather than defaulted; the whole assembly
    /// fails if nothing valid survives, so an empty campaign is never
    /// persisted. Each surviving slot gets a fresh id and a copy of the DM's
    /// timezone.
    pub fn assemble(
        title: &str,
        dm_name: &str,
        zone: &str,
        slots: &[SlotInput],
    ) -> AppResult<Campaign> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Campaign title is required".to_string(),
            ));
        }
        if dm_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Dungeon Master name is required".to_string(),
            ));
        }
        if zone.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Timezone is required".to_string(),
            ));
        }

        // Reject a bad zone before touching any slot; a campaign must never
        // be stored with a zone the conversion utility cannot resolve.
        timezone::parse_zone(zone)?;

        let mut dates = Vec::new();
        for slot in slots {
            let (date, time) = match parse_slot(slot) {
                Some(pair) => pair,
                None => continue,
            };
            let instant = timezone::local_to_utc(date, time, zone)?;
            dates.push(SessionSlot {
                id: Uuid::new_v4().to_string(),
                date_time: instant,
                timezone: zone.to_string(),
            });
        }

        if dates.is_empty() {
            return Err(AppError::ValidationError(
                "At least one session date and time is required".to_string(),
            ));
        }

        Ok(Campaign {
            id: ObjectId::new(),
            title: title.trim().to_string(),
            dm_name: dm_name.trim().to_string(),
            timezone: zone.to_string(),
            dates,
            created_at: Utc::now(),
        })
    }
}

fn parse_slot(slot: &SlotInput) -> Option<(NaiveDate, NaiveTime)> {
    if slot.date.trim().is_empty() || slot.time.trim().is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(slot.date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(slot.time.trim(), "%H:%M").ok()?;
    Some((date, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn slot(date: &str, time: &str) -> SlotInput {
        SlotInput {
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn assembles_sessions_in_the_dm_timezone() {
        let campaign = Campaign::assemble(
            "Lost Mines",
            "Matt",
            "America/New_York",
            &[slot("2024-01-15", "19:00"), slot("2024-07-15", "19:00")],
        )
        .unwrap();

        assert_eq!(campaign.dates.len(), 2);
        assert_eq!(
            campaign.dates[0].date_time,
            Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap()
        );
        assert_eq!(
            campaign.dates[1].date_time,
            Utc.with_ymd_and_hms(2024, 7, 15, 23, 0, 0).unwrap()
        );
        assert!(campaign.dates.iter().all(|s| s.timezone == "America/New_York"));
        assert_ne!(campaign.dates[0].id, campaign.dates[1].id);
    }

    #[test]
    fn incomplete_pairs_are_dropped_not_defaulted() {
        let campaign = Campaign::assemble(
            "Lost Mines",
            "Matt",
            "America/New_York",
            &[
                slot("2024-01-15", "19:00"),
                slot("", "19:00"),
                slot("2024-01-22", ""),
                slot("not-a-date", "19:00"),
            ],
        )
        .unwrap();

        assert_eq!(campaign.dates.len(), 1);
    }

    #[test]
    fn zero_valid_slots_is_a_validation_error() {
        let err = Campaign::assemble(
            "Lost Mines",
            "Matt",
            "America/New_York",
            &[slot("", ""), slot("2024-13-40", "19:00")],
        )
        .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let slots = [slot("2024-01-15", "19:00")];
        for (title, dm, zone) in [
            ("", "Matt", "America/New_York"),
            ("Lost Mines", "  ", "America/New_York"),
            ("Lost Mines", "Matt", ""),
        ] {
            let err = Campaign::assemble(title, dm, zone, &slots).unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }
    }

    #[test]
    fn unknown_timezone_fails_before_any_slot_is_built() {
        let err = Campaign::assemble(
            "Lost Mines",
            "Matt",
            "Middle/Earth",
            &[slot("2024-01-15", "19:00")],
        )
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidTimezone(_)));
    }
}

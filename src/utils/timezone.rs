use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::utils::error::{AppError, AppResult};

/// A stored UTC instant rendered for one viewer's timezone: the local
/// wall-clock string plus the zone abbreviation in effect at that instant
/// ("EST" for a January session, "EDT" for a July one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDisplay {
    pub local: String,
    pub abbreviation: String,
}

pub fn parse_zone(zone: &str) -> AppResult<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(format!("Unknown IANA timezone: {}", zone)))
}

/// Resolves a wall-clock date/time in `zone` to the single UTC instant it
/// names, using the zone's offset rules for that specific date.
///
/// A wall-clock time inside a spring-forward gap does not exist; it is
/// advanced in 15-minute steps to the first representable local time after
/// the gap. A time inside a fall-back repeated hour is ambiguous; the
/// earlier occurrence is taken.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime, zone: &str) -> AppResult<DateTime<Utc>> {
    let tz = parse_zone(zone)?;
    let naive = NaiveDateTime::new(date, time);

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => {
            // Bounded at 25 hours: date-line changes can skip an entire
            // calendar day (Pacific/Apia, 2011-12-30).
            let mut probe = naive;
            for _ in 0..(25 * 4) {
                probe = probe + Duration::minutes(15);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return Ok(dt.with_timezone(&Utc)),
                    LocalResult::Ambiguous(earlier, _later) => {
                        return Ok(earlier.with_timezone(&Utc))
                    }
                    LocalResult::None => continue,
                }
            }
            Err(AppError::ValidationError(format!(
                "{} has no representable instant in {}",
                naive, zone
            )))
        }
    }
}

/// Formats a stored UTC instant in the viewer's timezone, using the offset
/// in effect at that instant rather than the offset in effect now. Never
/// falls back to UTC on an unknown zone; the caller gets the error.
pub fn utc_to_local(instant: DateTime<Utc>, zone: &str) -> AppResult<LocalDisplay> {
    let tz = parse_zone(zone)?;
    let local = instant.with_timezone(&tz);

    Ok(LocalDisplay {
        local: local.format("%Y-%m-%d %H:%M").to_string(),
        abbreviation: local.format("%Z").to_string(),
    })
}

//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Render a backend timestamp as `dd.MM.yyyy HH:mm`. Values that do not
/// parse are shown as received.
pub fn format_date_time(raw: &str) -> String {
    let Some(parsed) = parse_date_time(raw) else {
        log::debug!("unparsed timestamp: {raw}");
        return raw.to_owned();
    };
    parsed
        .format(format_description!("[day].[month].[year] [hour]:[minute]"))
        .unwrap_or_else(|_| raw.to_owned())
}

/// Accepts RFC 3339, ISO local date-times with or without seconds, and bare dates.
pub fn parse_date_time(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .ok()
        .or_else(|| {
            Date::parse(raw, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
        })
}

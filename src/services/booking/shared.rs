use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{self, Result, Row};

use crate::models::booking::Booking;

/// Columns selected by every booking query, in `map_booking_row` order.
pub(crate) const BOOKING_COLUMNS: &str =
    "id, title, room, category_id, start_datetime, end_datetime, created_at";

/// Timestamps are stored as UTC RFC 3339 so string order matches time order.
pub(crate) fn to_storage(value: &DateTime<Local>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Decode the RFC 3339 text in column `idx`.
pub(crate) fn to_local_datetime(idx: usize, value: String) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn map_booking_row(row: &Row<'_>) -> Result<Booking> {
    Ok(Booking {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        room: row.get(2)?,
        category_id: row.get(3)?,
        start: to_local_datetime(4, row.get::<_, String>(4)?)?,
        end: to_local_datetime(5, row.get::<_, String>(5)?)?,
        created_at: Some(to_local_datetime(6, row.get::<_, String>(6)?)?),
    })
}

use super::shared::{map_booking_row, to_storage, BOOKING_COLUMNS};
use super::BookingService;
use crate::layout::WeekWindow;
use crate::models::booking::Booking;
use crate::models::event::CalendarEvent;
use crate::services::category::CategoryService;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::collections::HashMap;

impl<'a> BookingService<'a> {
    /// List every booking ordered by start.
    pub fn list_all(&self) -> Result<Vec<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings ORDER BY start_datetime ASC, id ASC",
            BOOKING_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;

        let bookings = stmt
            .query_map([], map_booking_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(bookings)
    }

    /// Bookings overlapping the half-open range `[start, end)`.
    pub fn find_by_date_range(
        &self,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Vec<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings
             WHERE start_datetime < ?1 AND end_datetime > ?2
             ORDER BY start_datetime ASC, id ASC",
            BOOKING_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;

        let bookings = stmt
            .query_map([to_storage(&end), to_storage(&start)], map_booking_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(bookings)
    }

    /// Calendar events for every booking touching `week`, colored by category.
    pub fn events_for_week(&self, week: &WeekWindow) -> Result<Vec<CalendarEvent>> {
        let start = local_midnight(week.start())?;
        let after = week
            .end()
            .succ_opt()
            .ok_or_else(|| anyhow!("Week of {} has no following day", week.start()))?;
        let end = local_midnight(after)?;
        let bookings = self.find_by_date_range(start, end)?;

        let categories: HashMap<i64, _> = CategoryService::new(self.conn)
            .list_all()?
            .into_iter()
            .filter_map(|c| c.id.map(|id| (id, c)))
            .collect();

        let events: Vec<CalendarEvent> = bookings
            .iter()
            .map(|booking| {
                let category = booking.category_id.and_then(|id| categories.get(&id));
                booking.to_calendar_event(category)
            })
            .collect();

        log::debug!(
            "Loaded {} booking event(s) for week of {}",
            events.len(),
            week.start()
        );
        Ok(events)
    }
}

fn local_midnight(date: NaiveDate) -> Result<DateTime<Local>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid midnight for {}", date))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Local midnight of {} does not exist", date))
}

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Local, NaiveDate, TimeZone};

use crate::models::booking::Booking;

pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Editable fields of the quick booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFormState {
    pub date: NaiveDate,
    pub title: String,
    pub room: String,
    pub category_id: Option<i64>,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: u32,
    pub error: Option<String>,
}

impl BookingFormState {
    pub fn for_date(date: NaiveDate, start_hour: u32) -> Self {
        Self {
            date,
            title: String::new(),
            room: String::new(),
            category_id: None,
            start_hour: start_hour.min(23),
            start_minute: 0,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            error: None,
        }
    }

    pub fn to_booking(&self) -> Result<Booking> {
        let start_naive = self
            .date
            .and_hms_opt(self.start_hour, self.start_minute, 0)
            .ok_or_else(|| {
                anyhow!(
                    "Invalid start time {:02}:{:02}",
                    self.start_hour,
                    self.start_minute
                )
            })?;
        let start = Local
            .from_local_datetime(&start_naive)
            .earliest()
            .context("Start time does not exist in the local time zone")?;
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(self.duration_minutes)))
            .context("End time is out of range")?;

        let mut booking = Booking::new(self.title.trim(), start, end);
        let room = self.room.trim();
        if !room.is_empty() {
            booking = booking.with_room(room);
        }
        if let Some(category_id) = self.category_id {
            booking = booking.with_category(category_id);
        }

        booking.validate()?;
        Ok(booking)
    }
}

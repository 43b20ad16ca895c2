// Test fixtures - reusable test data
// Provides consistent bookings and events across test files
#![allow(dead_code)]

use booking_calendar::models::event::CalendarEvent;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday 12 March 2025
    pub fn mid_week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// Monday 10 March 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Sunday 16 March 2025
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
            .earliest()
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn on(id: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent::new(
            id,
            id,
            dates::at(date, start.0, start.1),
            dates::at(date, end.0, end.1),
        )
    }

    /// A 09:00-10:00, B 09:30-10:30, C 10:15-11:00 on Wednesday.
    /// B overlaps A, C overlaps B but not A.
    pub fn chain() -> Vec<CalendarEvent> {
        let day = dates::mid_week();
        vec![
            on("A", day, (9, 0), (10, 0)),
            on("B", day, (9, 30), (10, 30)),
            on("C", day, (10, 15), (11, 0)),
        ]
    }
}

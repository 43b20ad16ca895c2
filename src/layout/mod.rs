//! Week calendar layout engine.
//!
//! Everything here is a pure function of (reference date, visible hours,
//! events). Nothing is cached between calls; recomputing with the same inputs
//! yields the same layout.

pub mod grid;
pub mod interaction;
pub mod overlap;
pub mod placement;
pub mod week;

use chrono::NaiveDate;

pub use grid::HourRange;
pub use interaction::{Activation, ActivationKey, CalendarController, CalendarHandler};
pub use placement::{place_events, EventRect, PixelRect, PlacedEvent};
pub use week::{Navigation, WeekWindow, DAYS_PER_WEEK};

use crate::models::event::CalendarEvent;

/// Days, hour labels and placed events for one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout<'a> {
    pub week: WeekWindow,
    pub days: [NaiveDate; DAYS_PER_WEEK],
    pub hour_range: HourRange,
    pub hours: Vec<u32>,
    pub placed: Vec<PlacedEvent<'a>>,
}

impl<'a> WeekLayout<'a> {
    pub fn compute(reference: NaiveDate, hours: HourRange, events: &'a [CalendarEvent]) -> Self {
        let week = WeekWindow::containing(reference);
        Self {
            week,
            days: week.days(),
            hour_range: hours,
            hours: hours.labels(),
            placed: place_events(events, &week, hours),
        }
    }

    /// Number of events placed on the grid.
    pub fn event_count(&self) -> usize {
        self.placed.len()
    }

    pub fn placed_on(&self, day_index: usize) -> impl Iterator<Item = &PlacedEvent<'a>> {
        self.placed.iter().filter(move |p| p.day_index == day_index)
    }
}

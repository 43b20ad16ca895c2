//! Geometric placement of events on the 8-column week grid.
//!
//! Column 0 holds the hour labels, columns 1..=7 are Monday..Sunday.
//! Vertical positions are fractions of the grid height, horizontal ones are
//! percentages of the grid width. Pixel margins are applied last, in
//! [`EventRect::to_pixels`].

use crate::layout::grid::HourRange;
use crate::layout::overlap::{chain_sweep, group_by_day};
use crate::layout::week::WeekWindow;
use crate::models::event::CalendarEvent;
use crate::utils::date::fractional_hour;

/// Hour-label column plus seven day columns.
pub const GRID_COLUMNS: usize = 8;
pub const COLUMN_WIDTH_PERCENT: f64 = 100.0 / GRID_COLUMNS as f64;
/// Share of a day column available to events.
pub const OVERLAP_SHRINK: f64 = 0.9;
pub const EVENT_LEFT_INSET_PX: f32 = 4.0;
pub const EVENT_HORIZONTAL_MARGIN_PX: f32 = 8.0;

/// Proportional rectangle of one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRect {
    /// Fraction of grid height above the event
    pub top: f64,
    /// Fraction of grid height covered; zero or negative for degenerate events
    pub height: f64,
    /// Percent of grid width left of the event
    pub left_percent: f64,
    /// Percent of grid width covered, before margins
    pub width_percent: f64,
}

/// Rectangle in pixels relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl EventRect {
    /// Rectangle for an event spanning `start_hour..end_hour` (fractional hours).
    ///
    /// The divisor is the number of hour labels (`end - start + 1`), not the
    /// hour span, so the last labelled hour gets a full row.
    pub fn compute(
        day_index: usize,
        overlap_index: usize,
        group_size: usize,
        start_hour: f64,
        end_hour: f64,
        hours: HourRange,
    ) -> Self {
        let rows = hours.slot_count() as f64;
        let top = (start_hour - hours.start as f64) / rows;
        let height = (end_hour - start_hour) / rows;

        let base_left = COLUMN_WIDTH_PERCENT * (day_index + 1) as f64;
        let width_percent = COLUMN_WIDTH_PERCENT * OVERLAP_SHRINK / group_size.max(1) as f64;
        let left_percent = base_left + overlap_index as f64 * width_percent;

        Self {
            top,
            height,
            left_percent,
            width_percent,
        }
    }

    /// Scale onto a grid of the given pixel size, applying the fixed margins.
    pub fn to_pixels(&self, grid_width: f32, grid_height: f32) -> PixelRect {
        PixelRect {
            x: (self.left_percent / 100.0) as f32 * grid_width + EVENT_LEFT_INSET_PX,
            y: self.top as f32 * grid_height,
            width: (self.width_percent / 100.0) as f32 * grid_width - EVENT_HORIZONTAL_MARGIN_PX,
            height: self.height as f32 * grid_height,
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.height > 0.0
    }
}

/// An event with its grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent<'a> {
    pub event: &'a CalendarEvent,
    /// Monday = 0 .. Sunday = 6
    pub day_index: usize,
    /// Sub-column inside the overlap group, in arrival order
    pub overlap_index: usize,
    pub group_size: usize,
    pub rect: EventRect,
}

/// Place every event that starts inside `week`.
///
/// Output is ordered by day, then overlap group, then sub-column. Events on
/// days outside the week are dropped, and a reversed hour range places
/// nothing.
pub fn place_events<'a>(
    events: &'a [CalendarEvent],
    week: &WeekWindow,
    hours: HourRange,
) -> Vec<PlacedEvent<'a>> {
    if hours.is_empty() {
        log::debug!(
            "Hour range {}..={} is empty, skipping placement",
            hours.start,
            hours.end
        );
        return Vec::new();
    }

    let mut placed = Vec::with_capacity(events.len());
    let mut dropped = 0usize;

    for (date, day_events) in group_by_day(events) {
        let Some(day_index) = week.day_index(date) else {
            dropped += day_events.len();
            continue;
        };

        for group in chain_sweep(&day_events) {
            let group_size = group.len();
            for (overlap_index, event) in group.members().iter().copied().enumerate() {
                let rect = EventRect::compute(
                    day_index,
                    overlap_index,
                    group_size,
                    fractional_hour(&event.start),
                    fractional_hour(&event.end),
                    hours,
                );
                placed.push(PlacedEvent {
                    event,
                    day_index,
                    overlap_index,
                    group_size,
                    rect,
                });
            }
        }
    }

    if dropped > 0 {
        log::debug!(
            "Dropped {} event(s) outside week {}..{}",
            dropped,
            week.start(),
            week.end()
        );
    }

    placed
}

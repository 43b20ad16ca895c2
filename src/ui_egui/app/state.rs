use chrono::NaiveDate;

use super::booking_form::BookingFormState;
use crate::models::event::CalendarEvent;

/// Selection and dialog state that outlives a single frame.
#[derive(Debug, Default)]
pub struct AppState {
    pub selected_date: Option<NaiveDate>,
    pub selected_event: Option<CalendarEvent>,
    pub booking_form: Option<BookingFormState>,
    /// Set when the visible week changed or bookings were modified
    pub needs_reload: bool,
    pub status: Option<String>,
}

impl AppState {
    pub fn sidebar_open(&self) -> bool {
        self.selected_event.is_some() || self.booking_form.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selected_event = None;
        self.booking_form = None;
    }
}

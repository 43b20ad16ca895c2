use chrono::NaiveDate;

use super::booking_form::BookingFormState;
use super::state::AppState;
use crate::layout::week::week_start;
use crate::layout::CalendarHandler;
use crate::models::event::CalendarEvent;

/// Routes grid interactions into the app's selection state.
pub(super) struct AppHandler<'a> {
    pub state: &'a mut AppState,
    /// Hour new bookings start at when a day is clicked
    pub default_hour: u32,
}

impl CalendarHandler for AppHandler<'_> {
    fn on_day_click(&mut self, date: NaiveDate) {
        log::debug!("Day {} activated", date);
        self.state.selected_date = Some(date);
        self.state.selected_event = None;
        self.state.booking_form = Some(BookingFormState::for_date(date, self.default_hour));
    }

    fn on_event_click(&mut self, event: &CalendarEvent) {
        log::debug!("Event {} activated", event.id);
        self.state.selected_date = Some(event.day());
        self.state.selected_event = Some(event.clone());
        self.state.booking_form = None;
    }

    fn on_navigate(&mut self, reference: NaiveDate) {
        self.state.clear_selection();
        self.state.needs_reload = true;
        self.state.status = Some(format!("Week of {}", week_start(reference).format("%d %b %Y")));
    }
}

use chrono::Local;

use super::context::AppContext;
use super::state::AppState;
use super::BookingCalendarApp;
use crate::layout::CalendarController;
use crate::models::settings::Settings;
use crate::services::database::Database;

impl BookingCalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, database: Database, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        let hours = settings.hour_range();

        let mut app = Self {
            context: AppContext::new(database),
            controller: CalendarController::new(today, hours),
            settings,
            events: Vec::new(),
            categories: Vec::new(),
            state: AppState::default(),
        };
        app.reload_categories();
        app.reload_events();
        app
    }

    /// Refresh the cached events for the visible week.
    pub(super) fn reload_events(&mut self) {
        let week = self.controller.week();
        match self.context.booking_service().events_for_week(&week) {
            Ok(events) => {
                log::debug!("Loaded {} bookings for week of {}", events.len(), week.start());
                self.events = events;
            }
            Err(err) => {
                log::warn!("Failed to load bookings: {:#}", err);
                self.state.status = Some("Failed to load bookings".to_string());
                self.events.clear();
            }
        }
        self.state.needs_reload = false;
    }

    pub(super) fn reload_categories(&mut self) {
        match self.context.category_service().list_all() {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                log::warn!("Failed to load categories: {:#}", err);
                self.categories.clear();
            }
        }
    }
}

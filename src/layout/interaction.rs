//! Delegation of grid interactions to the host.
//!
//! The controller owns only the reference date and the visible hour range.
//! Clicks and key presses are forwarded to a [`CalendarHandler`]; what they
//! mean (open a booking, route somewhere, persist a preference) is up to the
//! host.

use chrono::NaiveDate;

use super::grid::HourRange;
use super::week::{Navigation, WeekWindow};
use super::WeekLayout;
use crate::models::event::CalendarEvent;

/// Callbacks invoked synchronously by [`CalendarController`].
#[cfg_attr(test, mockall::automock)]
pub trait CalendarHandler {
    fn on_day_click(&mut self, date: NaiveDate);

    fn on_event_click(&mut self, event: &CalendarEvent);

    /// Called after the reference date changed through navigation.
    fn on_navigate(&mut self, _reference: NaiveDate) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
    Other,
}

/// How a day cell was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Key(ActivationKey),
}

impl Activation {
    /// Pointer clicks and Enter/Space activate; other keys do not.
    pub fn triggers(self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key(ActivationKey::Enter | ActivationKey::Space) => true,
            Activation::Key(ActivationKey::Other) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarController {
    reference: NaiveDate,
    hours: HourRange,
}

impl CalendarController {
    pub fn new(reference: NaiveDate, hours: HourRange) -> Self {
        Self { reference, hours }
    }

    pub fn week(&self) -> WeekWindow {
        WeekWindow::containing(self.reference)
    }

    /// Move the reference date and notify the host.
    pub fn navigate(
        &mut self,
        navigation: Navigation,
        today: NaiveDate,
        handler: &mut dyn CalendarHandler,
    ) -> NaiveDate {
        self.reference = navigation.apply(self.reference, today);
        log::debug!("Navigated {:?} to {}", navigation, self.reference);
        handler.on_navigate(self.reference);
        self.reference
    }

    /// Forward a day activation. Returns whether the handler was called.
    pub fn activate_day(
        &self,
        date: NaiveDate,
        activation: Activation,
        handler: &mut dyn CalendarHandler,
    ) -> bool {
        if !activation.triggers() {
            return false;
        }
        handler.on_day_click(date);
        true
    }

    pub fn activate_event(&self, event: &CalendarEvent, handler: &mut dyn CalendarHandler) {
        handler.on_event_click(event);
    }

    /// Layout of the current week for `events`.
    pub fn layout<'a>(&self, events: &'a [CalendarEvent]) -> WeekLayout<'a> {
        WeekLayout::compute(self.reference, self.hours, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, TimeZone};
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller() -> CalendarController {
        CalendarController::new(date(2025, 3, 12), HourRange::default())
    }

    #[test]
    fn test_pointer_click_calls_handler() {
        let mut handler = MockCalendarHandler::new();
        handler
            .expect_on_day_click()
            .with(eq(date(2025, 3, 13)))
            .times(1)
            .return_const(());

        let activated =
            controller().activate_day(date(2025, 3, 13), Activation::Pointer, &mut handler);
        assert!(activated);
    }

    #[test]
    fn test_enter_and_space_activate_days() {
        let mut handler = MockCalendarHandler::new();
        handler.expect_on_day_click().times(2).return_const(());

        let c = controller();
        let enter = Activation::Key(ActivationKey::Enter);
        let space = Activation::Key(ActivationKey::Space);
        assert!(c.activate_day(date(2025, 3, 10), enter, &mut handler));
        assert!(c.activate_day(date(2025, 3, 11), space, &mut handler));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut handler = MockCalendarHandler::new();
        handler.expect_on_day_click().never();

        let activated = controller().activate_day(
            date(2025, 3, 10),
            Activation::Key(ActivationKey::Other),
            &mut handler,
        );
        assert!(!activated);
    }

    #[test]
    fn test_event_click_passes_full_event() {
        let start = Local.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap();
        let event = CalendarEvent::new("booking-3", "Lab", start, start + Duration::hours(1));

        let mut handler = MockCalendarHandler::new();
        handler
            .expect_on_event_click()
            .withf(|e| e.id == "booking-3" && e.title == "Lab")
            .times(1)
            .return_const(());

        controller().activate_event(&event, &mut handler);
    }

    #[test]
    fn test_navigation_updates_reference_and_notifies() {
        let mut handler = MockCalendarHandler::new();
        handler
            .expect_on_navigate()
            .with(eq(date(2025, 3, 19)))
            .times(1)
            .return_const(());
        handler
            .expect_on_navigate()
            .with(eq(date(2025, 3, 12)))
            .times(1)
            .return_const(());

        let mut c = controller();
        let today = date(2025, 3, 12);

        assert_eq!(c.navigate(Navigation::NextWeek, today, &mut handler), date(2025, 3, 19));
        assert_eq!(c.week().start(), date(2025, 3, 17));
        assert_eq!(c.navigate(Navigation::Today, today, &mut handler), today);
    }

    #[test]
    fn test_layout_uses_controller_state() {
        let c = CalendarController::new(date(2025, 3, 12), HourRange::new(9, 17));

        let layout = c.layout(&[]);

        assert_eq!(layout.hours, (9..=17).collect::<Vec<_>>());
        assert_eq!(layout.days[0], date(2025, 3, 10));
        assert_eq!(layout.event_count(), 0);
    }
}

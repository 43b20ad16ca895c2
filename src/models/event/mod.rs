// Event module
// Time-ranged calendar entry consumed by the week layout engine

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::category::is_valid_hex_color;

/// A time-ranged entry shown on the week grid.
///
/// `start < end` is expected but not enforced here; the layout engine passes
/// degenerate events through unchanged. Call [`CalendarEvent::validate`] when
/// the invariant matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Identifier, unique within one rendering
    pub id: String,
    /// Reference to the booking this event was derived from
    pub booking_id: Option<i64>,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Hex color (#RRGGBB or #RGB)
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    EndBeforeStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

impl CalendarEvent {
    /// Create a new event with required fields.
    ///
    /// # Examples
    /// ```
    /// use booking_calendar::models::event::CalendarEvent;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let event = CalendarEvent::new("evt-1", "Room 101", start, start + Duration::hours(1));
    /// assert_eq!(event.title, "Room 101");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.into(),
            booking_id: None,
            title: title.into(),
            start,
            end,
            color: None,
        }
    }

    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Check title, time ordering and color format.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventValidationError::EndBeforeStart);
        }

        if let Some(ref color) = self.color {
            if !is_valid_hex_color(color) {
                return Err(EventValidationError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Local calendar day the event starts on.
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct CalendarEventBuilder {
    id: Option<String>,
    booking_id: Option<i64>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn booking_id(mut self, booking_id: i64) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build and validate the event
    pub fn build(self) -> Result<CalendarEvent, EventValidationError> {
        let id = self.id.ok_or(EventValidationError::MissingField("id"))?;
        let title = self.title.ok_or(EventValidationError::MissingField("title"))?;
        let start = self.start.ok_or(EventValidationError::MissingField("start time"))?;
        let end = self.end.ok_or(EventValidationError::MissingField("end time"))?;

        let event = CalendarEvent {
            id,
            booking_id: self.booking_id,
            title,
            start,
            end,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn sample_end() -> DateTime<Local> {
        sample_start() + Duration::hours(1)
    }

    #[test]
    fn test_new_event_keeps_fields() {
        let event = CalendarEvent::new("a", "Meeting", sample_start(), sample_end());

        assert_eq!(event.id, "a");
        assert_eq!(event.title, "Meeting");
        assert!(event.booking_id.is_none());
        assert!(event.color.is_none());
        assert_eq!(event.duration(), Duration::hours(1));
    }

    #[test]
    fn test_new_event_does_not_validate() {
        // Degenerate events must still be constructible for layout pass-through.
        let event = CalendarEvent::new("a", "Broken", sample_end(), sample_start());
        assert_eq!(event.validate(), Err(EventValidationError::EndBeforeStart));
    }

    #[test]
    fn test_validate_empty_title() {
        let event = CalendarEvent::new("a", "   ", sample_start(), sample_end());
        assert_eq!(event.validate(), Err(EventValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_equal_times() {
        let event = CalendarEvent::new("a", "Zero", sample_start(), sample_start());
        assert_eq!(event.validate(), Err(EventValidationError::EndBeforeStart));
    }

    #[test]
    fn test_validate_invalid_color() {
        let mut event = CalendarEvent::new("a", "Meeting", sample_start(), sample_end());
        event.color = Some("red".to_string());

        let err = event.validate().unwrap_err();
        assert!(err.to_string().contains("hex format"));
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let event = CalendarEvent::builder()
            .id("booking-7")
            .booking_id(7)
            .title("Lab A")
            .start(sample_start())
            .end(sample_end())
            .color("#3B82F6")
            .build()
            .unwrap();

        assert_eq!(event.booking_id, Some(7));
        assert_eq!(event.color.as_deref(), Some("#3B82F6"));
    }

    #[test]
    fn test_builder_missing_title() {
        let result = CalendarEvent::builder()
            .id("x")
            .start(sample_start())
            .end(sample_end())
            .build();

        assert_eq!(result, Err(EventValidationError::MissingField("title")));
        assert_eq!(result.unwrap_err().to_string(), "Event title is required");
    }

    #[test]
    fn test_day_uses_local_date() {
        let event = CalendarEvent::new("a", "Late", sample_start(), sample_end());
        assert_eq!(event.day(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }
}

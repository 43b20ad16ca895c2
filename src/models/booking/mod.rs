// Booking module
// Persisted room reservation and its conversion into a calendar event

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::category::BookingCategory;
use crate::models::event::{CalendarEvent, EventValidationError};

/// A reservation of a room for a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<i64>,
    pub title: String,
    pub room: Option<String>,
    pub category_id: Option<i64>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub created_at: Option<DateTime<Local>>,
}

impl Booking {
    pub fn new(title: impl Into<String>, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            id: None,
            title: title.into(),
            room: None,
            category_id: None,
            start,
            end,
            created_at: None,
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(EventValidationError::EndBeforeStart);
        }
        Ok(())
    }

    /// Title shown on the grid: "Title (Room)" when a room is set.
    pub fn display_title(&self) -> String {
        match self.room.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(room) => format!("{} ({})", self.title, room),
            None => self.title.clone(),
        }
    }

    /// Convert into the event record the layout engine consumes.
    pub fn to_calendar_event(&self, category: Option<&BookingCategory>) -> CalendarEvent {
        let id = match self.id {
            Some(id) => format!("booking-{}", id),
            None => format!("booking-new-{}", self.start.timestamp()),
        };

        CalendarEvent {
            id,
            booking_id: self.id,
            title: self.display_title(),
            start: self.start,
            end: self.end,
            color: category.map(|c| c.color.clone()),
        }
    }
}

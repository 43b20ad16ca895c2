//! Booking category model.
//!
//! Categories group bookings by type (Lecture, Meeting, etc.) and provide the
//! display color of every event derived from a booking in that category.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback color for bookings without a category.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// A category for organizing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCategory {
    /// Unique identifier (database primary key)
    pub id: Option<i64>,
    /// Display name of the category (must be unique)
    pub name: String,
    /// Hex color code for the category (e.g., "#3B82F6")
    pub color: String,
}

impl BookingCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Validate the category data.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong);
        }

        if !is_valid_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor);
        }

        Ok(())
    }
}

/// Validation errors for BookingCategory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name must be 50 characters or less")]
    NameTooLong,
    #[error("Invalid color format (use hex like #FF0000)")]
    InvalidColor,
}

/// Check if a string is a `#RGB` or `#RRGGBB` hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Categories seeded into a fresh database.
pub fn default_categories() -> Vec<BookingCategory> {
    vec![
        BookingCategory::new("Lecture", "#3B82F6"),
        BookingCategory::new("Meeting", "#8B5CF6"),
        BookingCategory::new("Exam", "#EF4444"),
        BookingCategory::new("Maintenance", "#F59E0B"),
    ]
}

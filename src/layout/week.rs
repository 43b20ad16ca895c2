//! Monday-anchored week window and week navigation.
//!
//! Weeks are limited to the ones whose seven days all fit in [`NaiveDate`];
//! references beyond either end clamp to the first or last full week.

use chrono::{Datelike, Days, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Monday of the earliest week fully representable by [`NaiveDate`].
fn first_week_start() -> NaiveDate {
    let min = NaiveDate::MIN;
    let offset = (7 - min.weekday().num_days_from_monday()) % 7;
    min.checked_add_days(Days::new(u64::from(offset))).unwrap_or(min)
}

/// Monday of the latest week fully representable by [`NaiveDate`].
fn last_week_start() -> NaiveDate {
    let max = NaiveDate::MAX;
    let monday = max
        .checked_sub_days(Days::new(u64::from(max.weekday().num_days_from_monday())))
        .unwrap_or(max);
    if monday.checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1)).is_some() {
        monday
    } else {
        monday.checked_sub_days(Days::new(7)).unwrap_or(monday)
    }
}

/// The Monday on or before `date`, clamped to the representable weeks.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(back)
        .unwrap_or_else(first_week_start)
        .clamp(first_week_start(), last_week_start())
}

/// Map a Sunday-is-0 weekday number onto a Monday-first column (Sunday -> 6).
pub fn day_column_from_sunday_index(weekday: u32) -> usize {
    if weekday == 0 {
        6
    } else {
        (weekday - 1) as usize
    }
}

/// Monday-first column index for a calendar date.
pub fn day_column(date: NaiveDate) -> usize {
    day_column_from_sunday_index(date.weekday().num_days_from_sunday())
}

/// Seven consecutive days starting on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The week that contains `reference`.
    pub fn containing(reference: NaiveDate) -> Self {
        Self {
            start: week_start(reference),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The Sunday closing the week.
    pub fn end(&self) -> NaiveDate {
        self.offset(DAYS_PER_WEEK - 1)
    }

    pub fn days(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.offset(i))
    }

    /// `start` is always a full week's start, so the addition cannot overflow.
    fn offset(&self, days: usize) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(days as u64))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }

    /// Column of `date` in this week, or `None` when the date is not one of its days.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        let index = day_column(date);
        (self.days()[index] == date).then_some(index)
    }
}

/// Week navigation requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    PreviousWeek,
    NextWeek,
    Today,
}

impl Navigation {
    /// New reference date after navigating from `reference`.
    ///
    /// Stepping past the representable range leaves the reference unchanged.
    pub fn apply(self, reference: NaiveDate, today: NaiveDate) -> NaiveDate {
        let week = Days::new(DAYS_PER_WEEK as u64);
        match self {
            Navigation::PreviousWeek => reference.checked_sub_days(week).unwrap_or(reference),
            Navigation::NextWeek => reference.checked_add_days(week).unwrap_or(reference),
            Navigation::Today => today,
        }
    }
}

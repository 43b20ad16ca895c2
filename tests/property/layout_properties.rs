// Property-based tests for the week layout engine
// Random events and reference dates checked against layout invariants

use booking_calendar::layout::{HourRange, WeekLayout, WeekWindow};
use booking_calendar::models::event::CalendarEvent;
use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};
use proptest::prelude::*;

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650)
        .prop_map(|offset| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset))
}

/// Events on the week of 10 March 2025, starting on the quarter hour.
fn week_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((0i64..7, 32u32..80, 1u32..12), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (day, start_quarter, length_quarters))| {
                let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap() + Duration::days(day);
                let start = Local
                    .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
                    .earliest()
                    .unwrap()
                    + Duration::minutes(i64::from(start_quarter) * 15);
                let end = start + Duration::minutes(i64::from(length_quarters) * 15);
                CalendarEvent::new(format!("e{}", i), format!("Event {}", i), start, end)
            })
            .collect()
    })
}

proptest! {
    /// Property: the week always starts on the Monday on or before the reference
    #[test]
    fn prop_week_is_monday_anchored(reference in reference_date()) {
        let week = WeekWindow::containing(reference);
        prop_assert_eq!(week.start().weekday(), Weekday::Mon);
        prop_assert!(week.contains(reference));
        prop_assert!((reference - week.start()).num_days() < 7);
        prop_assert_eq!(week.days()[6], week.end());
    }

    /// Property: hour labels are the inclusive range, empty when reversed
    #[test]
    fn prop_hour_labels_inclusive(start in 0u32..24, end in 0u32..24) {
        let labels = HourRange::new(start, end).labels();
        if start <= end {
            prop_assert_eq!(labels.len() as u32, end - start + 1);
            prop_assert_eq!(labels.first().copied(), Some(start));
            prop_assert_eq!(labels.last().copied(), Some(end));
        } else {
            prop_assert!(labels.is_empty());
        }
    }

    /// Property: same inputs give the same layout
    #[test]
    fn prop_layout_is_deterministic(events in week_events()) {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let first = WeekLayout::compute(reference, HourRange::default(), &events);
        let second = WeekLayout::compute(reference, HourRange::default(), &events);
        prop_assert_eq!(first, second);
    }

    /// Property: every event of the week is placed exactly once
    #[test]
    fn prop_every_event_is_placed(events in week_events()) {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let layout = WeekLayout::compute(reference, HourRange::default(), &events);

        prop_assert_eq!(layout.event_count(), events.len());
        let mut ids: Vec<&str> = layout.placed.iter().map(|p| p.event.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), events.len());
    }

    /// Property: each group member starts before its predecessor in the group ends
    #[test]
    fn prop_groups_form_overlap_chains(events in week_events()) {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let layout = WeekLayout::compute(reference, HourRange::default(), &events);

        for pair in layout.placed.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.overlap_index == 0 {
                continue;
            }
            prop_assert_eq!(current.overlap_index, previous.overlap_index + 1);
            prop_assert_eq!(current.day_index, previous.day_index);
            prop_assert_eq!(current.group_size, previous.group_size);
            prop_assert!(previous.event.start <= current.event.start);
            prop_assert!(current.event.start < previous.event.end);
        }
    }

    /// Property: an overlap group fills at most 90% of its day column
    #[test]
    fn prop_groups_stay_inside_day_column(events in week_events()) {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let layout = WeekLayout::compute(reference, HourRange::default(), &events);
        let column = 100.0 / 8.0;

        for placed in &layout.placed {
            prop_assert!(placed.overlap_index < placed.group_size);
            let column_left = column * (placed.day_index + 1) as f64;
            let right = placed.rect.left_percent + placed.rect.width_percent;
            prop_assert!(placed.rect.left_percent >= column_left - 1e-9);
            prop_assert!(right <= column_left + column * 0.9 + 1e-9);
            let total_width = placed.rect.width_percent * placed.group_size as f64;
            prop_assert!((total_width - column * 0.9).abs() < 1e-9);
        }
    }
}

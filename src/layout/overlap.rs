//! Greedy chain-sweep grouping of overlapping same-day events.
//!
//! Events are sorted by start and swept once. Each event joins the first
//! existing group whose most recently added member still runs past the
//! event's start; otherwise it opens a new group. Only the last member is
//! compared, so a chain A-B-C lands in one group even when A and C do not
//! overlap. Consumers rely on this exact grouping; it is not interval
//! colouring.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::event::CalendarEvent;

/// Same-day events sharing a set of side-by-side sub-columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup<'a> {
    members: Vec<&'a CalendarEvent>,
}

impl<'a> OverlapGroup<'a> {
    fn open(first: &'a CalendarEvent) -> Self {
        Self {
            members: vec![first],
        }
    }

    /// True when the most recently added member ends after `candidate` starts.
    fn accepts(&self, candidate: &CalendarEvent) -> bool {
        self.members
            .last()
            .is_some_and(|last| last.end > candidate.start)
    }

    /// Members in arrival order; the position is the sub-column index.
    pub fn members(&self) -> &[&'a CalendarEvent] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Bucket events by the local calendar day they start on.
pub fn group_by_day(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<&CalendarEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.day()).or_default().push(event);
    }
    days
}

/// Partition one day's events into overlap groups.
pub fn chain_sweep<'a>(day_events: &[&'a CalendarEvent]) -> Vec<OverlapGroup<'a>> {
    let mut sorted = day_events.to_vec();
    // Stable, so equal starts keep input order.
    sorted.sort_by_key(|event| event.start);

    let mut groups: Vec<OverlapGroup<'a>> = Vec::new();
    for event in sorted {
        match groups.iter_mut().find(|group| group.accepts(event)) {
            Some(group) => group.members.push(event),
            None => groups.push(OverlapGroup::open(event)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn event(id: &str, day: u32, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent::new(
            id,
            id,
            Local.with_ymd_and_hms(2025, 3, day, start.0, start.1, 0).unwrap(),
            Local.with_ymd_and_hms(2025, 3, day, end.0, end.1, 0).unwrap(),
        )
    }

    fn ids(group: &OverlapGroup<'_>) -> Vec<String> {
        group.members().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_group_by_day_ignores_time_of_day() {
        let events = vec![
            event("late", 10, (22, 0), (23, 0)),
            event("early", 10, (1, 0), (2, 0)),
            event("tuesday", 11, (9, 0), (10, 0)),
        ];

        let days = group_by_day(&events);

        assert_eq!(days.len(), 2);
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(days[&monday].len(), 2);
    }

    #[test]
    fn test_two_overlapping_events_share_group() {
        let events = vec![
            event("a", 10, (9, 0), (10, 0)),
            event("b", 10, (9, 30), (10, 30)),
        ];
        let day: Vec<&CalendarEvent> = events.iter().collect();

        let groups = chain_sweep(&day);

        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_chain_without_clique_stays_in_one_group() {
        let events = vec![
            event("c", 10, (10, 15), (11, 0)),
            event("a", 10, (9, 0), (10, 0)),
            event("b", 10, (9, 30), (10, 30)),
        ];
        let day: Vec<&CalendarEvent> = events.iter().collect();

        let groups = chain_sweep(&day);

        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_touching_events_open_new_group() {
        let events = vec![
            event("a", 10, (9, 0), (10, 0)),
            event("b", 10, (10, 0), (11, 0)),
        ];
        let day: Vec<&CalendarEvent> = events.iter().collect();

        let groups = chain_sweep(&day);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn test_only_last_member_is_compared() {
        // a is long, b nests inside it, c starts after b ends but while a is running.
        let events = vec![
            event("a", 10, (9, 0), (13, 0)),
            event("b", 10, (9, 30), (10, 0)),
            event("c", 10, (11, 0), (12, 0)),
        ];
        let day: Vec<&CalendarEvent> = events.iter().collect();

        let groups = chain_sweep(&day);

        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[0]), vec!["a", "b"]);
        assert_eq!(ids(&groups[1]), vec!["c"]);
    }

    #[test]
    fn test_joins_first_accepting_group() {
        let events = vec![
            event("a", 10, (9, 0), (10, 0)),
            event("b", 10, (10, 0), (12, 0)),
            event("c", 10, (11, 0), (11, 30)),
        ];
        let day: Vec<&CalendarEvent> = events.iter().collect();

        let groups = chain_sweep(&day);

        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[1]), vec!["b", "c"]);
    }

    #[test]
    fn test_empty_day() {
        let groups = chain_sweep(&[]);
        assert!(groups.is_empty());
    }
}

//! Event domain model and temporal classification.
//!
//! # Responsibility
//! - Define the event record owned by its creator.
//! - Classify an event relative to a caller-provided calendar date.
//!
//! # Invariants
//! - Classification only looks at the calendar date; time of day never
//!   participates.
//! - An event dated exactly `today` is neither past nor upcoming.
//! - Undated events are neither past nor upcoming.

use super::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Stable identifier for events.
pub type EventId = Uuid;

/// Where an event sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    /// Dated strictly before the reference date.
    Past,
    /// Dated exactly on the reference date.
    Today,
    /// Dated strictly after the reference date.
    Upcoming,
    /// No date set.
    Undated,
}

/// Event created by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Creator of the event.
    pub owner_id: UserId,
    pub description: String,
    /// Optional calendar date, serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
}

impl Event {
    /// Creates an undated event with a generated stable ID.
    pub fn new(owner_id: UserId, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), owner_id, description)
    }

    pub fn with_id(id: EventId, owner_id: UserId, description: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            description: description.into(),
            date: None,
        }
    }

    /// Sets the calendar date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Classifies this event against `today`.
    pub fn timing(&self, today: NaiveDate) -> EventTiming {
        match self.date.map(|date| date.cmp(&today)) {
            None => EventTiming::Undated,
            Some(Ordering::Less) => EventTiming::Past,
            Some(Ordering::Equal) => EventTiming::Today,
            Some(Ordering::Greater) => EventTiming::Upcoming,
        }
    }

    pub fn is_past_on(&self, today: NaiveDate) -> bool {
        self.timing(today) == EventTiming::Past
    }

    pub fn is_upcoming_on(&self, today: NaiveDate) -> bool {
        self.timing(today) == EventTiming::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, EventTiming};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    #[test]
    fn timing_partitions_around_reference_date() {
        let owner = Uuid::new_v4();
        let today = date(2026, 3, 10);

        let past = Event::new(owner, "retro").with_date(date(2026, 3, 9));
        let same_day = Event::new(owner, "standup").with_date(today);
        let upcoming = Event::new(owner, "launch").with_date(date(2026, 3, 11));
        let undated = Event::new(owner, "someday");

        assert_eq!(past.timing(today), EventTiming::Past);
        assert_eq!(same_day.timing(today), EventTiming::Today);
        assert_eq!(upcoming.timing(today), EventTiming::Upcoming);
        assert_eq!(undated.timing(today), EventTiming::Undated);
    }

    #[test]
    fn same_day_event_is_neither_past_nor_upcoming() {
        let today = date(2026, 1, 1);
        let event = Event::new(Uuid::new_v4(), "new year").with_date(today);

        assert!(!event.is_past_on(today));
        assert!(!event.is_upcoming_on(today));
    }

    #[test]
    fn timing_crosses_month_and_year_boundaries() {
        let today = date(2026, 1, 1);
        let owner = Uuid::new_v4();

        let eve = Event::new(owner, "eve").with_date(date(2025, 12, 31));
        let next = Event::new(owner, "next").with_date(date(2026, 2, 1));

        assert!(eve.is_past_on(today));
        assert!(next.is_upcoming_on(today));
    }
}

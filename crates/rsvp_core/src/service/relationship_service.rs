//! Invitation/attendance use-cases and the attended-event partitions.
//!
//! # Responsibility
//! - Provide idempotent `invite` and `attend` transitions.
//! - Partition a user's attended events into past and upcoming.
//!
//! # Invariants
//! - Repeating `invite`/`attend` never creates a second record and never
//!   errors.
//! - `attend` does not require a prior invitation.
//! - Past is `date < today`, upcoming is `date > today`; an event dated
//!   `today` or undated is in neither. Both partitions go through
//!   `Event::timing` over the attended events, in attendance order.

use crate::model::event::{Event, EventTiming};
use crate::model::relation::{Attendance, Insertion, Invitation};
use crate::model::user::User;
use crate::repo::relation_repo::RelationRepository;
use crate::repo::RepoResult;
use chrono::{Local, NaiveDate};
use log::info;

/// Current local calendar date. Time of day is discarded.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Use-case service over invitation/attendance records.
pub struct RelationshipService<R: RelationRepository> {
    repo: R,
}

impl<R: RelationRepository> RelationshipService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Invites `invitee` to `event` on behalf of `inviter`.
    ///
    /// Any user may invite any user to any event; `inviter` is not checked
    /// against the event owner and is not persisted.
    pub fn invite(&self, inviter: &User, invitee: &User, event: &Event) -> RepoResult<Insertion> {
        let outcome = self
            .repo
            .insert_invitation_if_absent(&Invitation::new(event.id, invitee.id))?;
        info!(
            "event=invite module=service status=ok inviter_id={} invitee_id={} event_id={} created={}",
            inviter.id,
            invitee.id,
            event.id,
            outcome.is_created()
        );
        Ok(outcome)
    }

    /// Records that `attendee` attends `event`, invited or not.
    pub fn attend(&self, attendee: &User, event: &Event) -> RepoResult<Insertion> {
        let outcome = self
            .repo
            .insert_attendance_if_absent(&Attendance::new(event.id, attendee.id))?;
        info!(
            "event=attend module=service status=ok attendee_id={} event_id={} created={}",
            attendee.id,
            event.id,
            outcome.is_created()
        );
        Ok(outcome)
    }

    pub fn is_invited(&self, user: &User, event: &Event) -> RepoResult<bool> {
        self.repo.invitation_exists(event.id, user.id)
    }

    pub fn is_attending(&self, user: &User, event: &Event) -> RepoResult<bool> {
        self.repo.attendance_exists(event.id, user.id)
    }

    /// Attended events dated strictly before `today`.
    pub fn past_attended_events(&self, user: &User, today: NaiveDate) -> RepoResult<Vec<Event>> {
        self.attended_events_with_timing(user, today, EventTiming::Past)
    }

    /// Attended events dated strictly after `today`.
    pub fn upcoming_attended_events(
        &self,
        user: &User,
        today: NaiveDate,
    ) -> RepoResult<Vec<Event>> {
        self.attended_events_with_timing(user, today, EventTiming::Upcoming)
    }

    /// `past_attended_events` against the local date sampled at call time.
    pub fn past_attended_events_now(&self, user: &User) -> RepoResult<Vec<Event>> {
        self.past_attended_events(user, today())
    }

    /// `upcoming_attended_events` against the local date sampled at call time.
    pub fn upcoming_attended_events_now(&self, user: &User) -> RepoResult<Vec<Event>> {
        self.upcoming_attended_events(user, today())
    }

    fn attended_events_with_timing(
        &self,
        user: &User,
        today: NaiveDate,
        timing: EventTiming,
    ) -> RepoResult<Vec<Event>> {
        let mut events = self.repo.attended_events(user.id)?;
        events.retain(|event| event.timing(today) == timing);
        Ok(events)
    }

    pub fn attended_events(&self, user: &User) -> RepoResult<Vec<Event>> {
        self.repo.attended_events(user.id)
    }

    pub fn inviting_events(&self, user: &User) -> RepoResult<Vec<Event>> {
        self.repo.inviting_events(user.id)
    }

    pub fn inviteds(&self, event: &Event) -> RepoResult<Vec<User>> {
        self.repo.inviteds(event.id)
    }

    pub fn attendees(&self, event: &Event) -> RepoResult<Vec<User>> {
        self.repo.attendees(event.id)
    }
}

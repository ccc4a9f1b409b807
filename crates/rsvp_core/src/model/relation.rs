//! Join records between users and events.
//!
//! # Invariants
//! - At most one `Invitation` per `(event_id, invited_id)`.
//! - At most one `Attendance` per `(event_id, attendee_id)`.
//! - Records are never mutated after creation.

use super::event::EventId;
use super::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// "User `invited_id` is invited to event `event_id`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub event_id: EventId,
    pub invited_id: UserId,
}

impl Invitation {
    pub fn new(event_id: EventId, invited_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            invited_id,
        }
    }
}

/// "User `attendee_id` attends event `event_id`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Uuid,
    pub event_id: EventId,
    pub attendee_id: UserId,
}

impl Attendance {
    pub fn new(event_id: EventId, attendee_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            attendee_id,
        }
    }
}

/// Outcome of an idempotent "insert if absent" write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new join record was written.
    Created,
    /// The pair already had a record; nothing changed.
    AlreadyPresent,
}

impl Insertion {
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

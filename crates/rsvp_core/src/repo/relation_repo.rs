//! Invitation/attendance repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide atomic "insert if absent" writes for both join tables.
//! - Serve the reverse lookups (by user, by event) as indexed joins.
//!
//! # Invariants
//! - Idempotence relies on the `UNIQUE (event_uuid, <user>_uuid)` constraints;
//!   a single `INSERT .. ON CONFLICT DO NOTHING` statement is atomic even
//!   under concurrent writers.
//! - Lookups return rows in insertion order of the join record.
//! - No date comparison happens in SQL; `event_date` text only sorts by
//!   calendar order for four-digit years.

use crate::model::event::{Event, EventId};
use crate::model::relation::{Attendance, Insertion, Invitation};
use crate::model::user::{User, UserId};
use crate::repo::event_repo::{parse_event_row, EVENT_COLUMNS_SQL};
use crate::repo::user_repo::parse_user_row;
use crate::repo::{ensure_connection_ready, RepoResult, SchemaRequirement};
use rusqlite::{params, Connection, Params};

const RELATION_SCHEMA: SchemaRequirement = &[
    ("users", &["uuid", "name"]),
    ("events", &["uuid", "event_date"]),
    (
        "invitations",
        &["uuid", "event_uuid", "invited_uuid", "created_at"],
    ),
    (
        "attendances",
        &["uuid", "event_uuid", "attendee_uuid", "created_at"],
    ),
];

/// Repository interface for the two join tables.
pub trait RelationRepository {
    /// Writes `invitation` unless its `(event, invited)` pair already exists.
    fn insert_invitation_if_absent(&self, invitation: &Invitation) -> RepoResult<Insertion>;
    /// Writes `attendance` unless its `(event, attendee)` pair already exists.
    fn insert_attendance_if_absent(&self, attendance: &Attendance) -> RepoResult<Insertion>;
    fn invitation_exists(&self, event: EventId, invited: UserId) -> RepoResult<bool>;
    fn attendance_exists(&self, event: EventId, attendee: UserId) -> RepoResult<bool>;
    /// Events `user` was invited to.
    fn inviting_events(&self, user: UserId) -> RepoResult<Vec<Event>>;
    /// Users invited to `event`.
    fn inviteds(&self, event: EventId) -> RepoResult<Vec<User>>;
    /// Events `user` attends.
    fn attended_events(&self, user: UserId) -> RepoResult<Vec<Event>>;
    /// Users attending `event`.
    fn attendees(&self, event: EventId) -> RepoResult<Vec<User>>;
}

/// SQLite-backed invitation/attendance repository.
pub struct SqliteRelationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRelationRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, RELATION_SCHEMA)?;
        Ok(Self { conn })
    }

    fn query_events(&self, sql: &str, params: impl Params) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn query_users(&self, sql: &str, params: impl Params) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn exists(&self, sql: &str, event: EventId, user: UserId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            sql,
            params![event.to_string(), user.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl RelationRepository for SqliteRelationRepository<'_> {
    fn insert_invitation_if_absent(&self, invitation: &Invitation) -> RepoResult<Insertion> {
        let changed = self.conn.execute(
            "INSERT INTO invitations (uuid, event_uuid, invited_uuid)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (event_uuid, invited_uuid) DO NOTHING;",
            params![
                invitation.id.to_string(),
                invitation.event_id.to_string(),
                invitation.invited_id.to_string(),
            ],
        )?;
        Ok(insertion_from_changed(changed))
    }

    fn insert_attendance_if_absent(&self, attendance: &Attendance) -> RepoResult<Insertion> {
        let changed = self.conn.execute(
            "INSERT INTO attendances (uuid, event_uuid, attendee_uuid)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (event_uuid, attendee_uuid) DO NOTHING;",
            params![
                attendance.id.to_string(),
                attendance.event_id.to_string(),
                attendance.attendee_id.to_string(),
            ],
        )?;
        Ok(insertion_from_changed(changed))
    }

    fn invitation_exists(&self, event: EventId, invited: UserId) -> RepoResult<bool> {
        self.exists(
            "SELECT EXISTS(
                SELECT 1 FROM invitations WHERE event_uuid = ?1 AND invited_uuid = ?2
            );",
            event,
            invited,
        )
    }

    fn attendance_exists(&self, event: EventId, attendee: UserId) -> RepoResult<bool> {
        self.exists(
            "SELECT EXISTS(
                SELECT 1 FROM attendances WHERE event_uuid = ?1 AND attendee_uuid = ?2
            );",
            event,
            attendee,
        )
    }

    fn inviting_events(&self, user: UserId) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!(
                "SELECT {EVENT_COLUMNS_SQL}
                 FROM invitations i
                 JOIN events e ON e.uuid = i.event_uuid
                 WHERE i.invited_uuid = ?1
                 ORDER BY i.rowid ASC;"
            ),
            [user.to_string()],
        )
    }

    fn inviteds(&self, event: EventId) -> RepoResult<Vec<User>> {
        self.query_users(
            "SELECT u.uuid AS uuid, u.name AS name
             FROM invitations i
             JOIN users u ON u.uuid = i.invited_uuid
             WHERE i.event_uuid = ?1
             ORDER BY i.rowid ASC;",
            [event.to_string()],
        )
    }

    fn attended_events(&self, user: UserId) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!(
                "SELECT {EVENT_COLUMNS_SQL}
                 FROM attendances a
                 JOIN events e ON e.uuid = a.event_uuid
                 WHERE a.attendee_uuid = ?1
                 ORDER BY a.rowid ASC;"
            ),
            [user.to_string()],
        )
    }

    fn attendees(&self, event: EventId) -> RepoResult<Vec<User>> {
        self.query_users(
            "SELECT u.uuid AS uuid, u.name AS name
             FROM attendances a
             JOIN users u ON u.uuid = a.attendee_uuid
             WHERE a.event_uuid = ?1
             ORDER BY a.rowid ASC;",
            [event.to_string()],
        )
    }
}

fn insertion_from_changed(changed: usize) -> Insertion {
    if changed == 0 {
        Insertion::AlreadyPresent
    } else {
        Insertion::Created
    }
}

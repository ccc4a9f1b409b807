//! Event repository contract and SQLite implementation.
//!
//! # Invariants
//! - `event_date` is stored as ISO `YYYY-MM-DD` text so that SQL string
//!   comparison matches calendar order.
//! - The owner must reference an existing user (foreign key).

use crate::model::event::{Event, EventId};
use crate::model::user::UserId;
use crate::repo::{ensure_connection_ready, parse_uuid, RepoResult, SchemaRequirement};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const EVENT_SCHEMA: SchemaRequirement = &[(
    "events",
    &["uuid", "owner_uuid", "description", "event_date", "created_at"],
)];

/// Column list shared by every event read. Expects the table aliased `e`.
pub(crate) const EVENT_COLUMNS_SQL: &str = "e.uuid AS uuid,
    e.owner_uuid AS owner_uuid,
    e.description AS description,
    e.event_date AS event_date";

/// Repository interface for event records.
pub trait EventRepository {
    fn create_event(&self, event: &Event) -> RepoResult<EventId>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
    /// Events created by `owner`, in creation order.
    fn list_events_by_owner(&self, owner: UserId) -> RepoResult<Vec<Event>>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, EVENT_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        self.conn.execute(
            "INSERT INTO events (uuid, owner_uuid, description, event_date)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                event.id.to_string(),
                event.owner_id.to_string(),
                event.description.as_str(),
                event.date,
            ],
        )?;

        Ok(event.id)
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS_SQL} FROM events e WHERE e.uuid = ?1;"
        ))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }
        Ok(None)
    }

    fn list_events_by_owner(&self, owner: UserId) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS_SQL}
             FROM events e
             WHERE e.owner_uuid = ?1
             ORDER BY e.created_at ASC, e.rowid ASC;"
        ))?;
        let mut rows = stmt.query([owner.to_string()])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }
}

/// Parses a row selected with `EVENT_COLUMNS_SQL`.
pub(crate) fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let uuid_text: String = row.get("uuid")?;
    let owner_text: String = row.get("owner_uuid")?;
    let date: Option<NaiveDate> = row.get("event_date")?;

    let mut event = Event::with_id(
        parse_uuid(&uuid_text, "events.uuid")?,
        parse_uuid(&owner_text, "events.owner_uuid")?,
        row.get::<_, String>("description")?,
    );
    event.date = date;
    Ok(event)
}

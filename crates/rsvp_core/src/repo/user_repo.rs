//! User repository contract and SQLite implementation.

use crate::model::user::{User, UserId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoResult, SchemaRequirement};
use rusqlite::{params, Connection, Row};

const USER_SCHEMA: SchemaRequirement = &[("users", &["uuid", "name", "created_at"])];

/// Repository interface for user records.
pub trait UserRepository {
    /// Persists a new user. Blank names are rejected before SQL runs.
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Lists users in creation order.
    fn list_users(&self) -> RepoResult<Vec<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, USER_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        user.validate()?;

        self.conn.execute(
            "INSERT INTO users (uuid, name) VALUES (?1, ?2);",
            params![user.id.to_string(), user.name.as_str()],
        )?;

        Ok(user.id)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name FROM users WHERE uuid = ?1;")?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name FROM users ORDER BY created_at ASC, rowid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }
}

/// Parses a row exposing `uuid` and `name` columns.
pub(crate) fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "users.uuid")?;
    let name: String = row.get("name")?;
    Ok(User::with_id(id, name)?)
}

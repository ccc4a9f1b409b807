//! User/event creation and identifier lookups.
//!
//! # Responsibility
//! - Create users and events explicitly; nothing here deletes.
//! - Resolve identifiers to entities, turning absence into `NotFound` so
//!   relationship operations only ever see resolved entities.

use crate::model::event::{Event, EventId};
use crate::model::user::{User, UserId};
use crate::repo::event_repo::EventRepository;
use crate::repo::user_repo::UserRepository;
use crate::repo::{EntityKind, RepoError, RepoResult};
use chrono::NaiveDate;
use log::{info, warn};

/// Use-case service for users and the events they own.
pub struct DirectoryService<U: UserRepository, E: EventRepository> {
    users: U,
    events: E,
}

impl<U: UserRepository, E: EventRepository> DirectoryService<U, E> {
    pub fn new(users: U, events: E) -> Self {
        Self { users, events }
    }

    /// Creates and persists a user.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `name` is blank; nothing is written.
    pub fn create_user(&self, name: impl Into<String>) -> RepoResult<User> {
        let user = User::new(name).map_err(|err| {
            warn!("event=user_create module=service status=rejected reason=validation");
            RepoError::from(err)
        })?;
        self.users.create_user(&user)?;
        info!("event=user_create module=service status=ok user_id={}", user.id);
        Ok(user)
    }

    /// Creates an event owned by `owner`.
    pub fn create_event(
        &self,
        owner: &User,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> RepoResult<Event> {
        let mut event = Event::new(owner.id, description);
        event.date = date;
        self.events.create_event(&event)?;
        info!(
            "event=event_create module=service status=ok event_id={} owner_id={} dated={}",
            event.id,
            owner.id,
            event.date.is_some()
        );
        Ok(event)
    }

    /// Loads a user by ID.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no user has this ID.
    pub fn find_user(&self, id: UserId) -> RepoResult<User> {
        self.users.get_user(id)?.ok_or(RepoError::NotFound {
            kind: EntityKind::User,
            id,
        })
    }

    /// Loads an event by ID.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no event has this ID.
    pub fn find_event(&self, id: EventId) -> RepoResult<Event> {
        self.events.get_event(id)?.ok_or(RepoError::NotFound {
            kind: EntityKind::Event,
            id,
        })
    }

    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.users.list_users()
    }

    /// Events created by `owner`.
    pub fn owned_events(&self, owner: &User) -> RepoResult<Vec<Event>> {
        self.events.list_events_by_owner(owner.id)
    }
}

//! Core domain logic for event invitations and attendance.
//! This crate is the single source of truth for the relationship invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{Event, EventId, EventTiming};
pub use model::relation::{Attendance, Insertion, Invitation};
pub use model::user::{User, UserId};
pub use model::ModelValidationError;
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::relation_repo::{RelationRepository, SqliteRelationRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use service::directory_service::DirectoryService;
pub use service::relationship_service::{today, RelationshipService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

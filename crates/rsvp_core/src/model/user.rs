//! User domain model.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for users.
pub type UserId = Uuid;

/// Person who owns events, receives invitations and attends events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Required display name. Never blank.
    pub name: String,
}

impl User {
    /// Creates a user with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyUserName` when `name` is blank after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a user with a caller-provided ID, used when loading rows.
    pub fn with_id(id: UserId, name: impl Into<String>) -> Result<Self, ModelValidationError> {
        let user = Self {
            id,
            name: name.into(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Checks the required-field invariant.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.trim().is_empty() {
            return Err(ModelValidationError::EmptyUserName);
        }
        Ok(())
    }
}

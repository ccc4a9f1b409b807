//! Domain model for users, events and the two join records linking them.
//!
//! # Responsibility
//! - Define the canonical records used by repository and service layers.
//! - Keep temporal classification of events pure (no ambient clock).
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid`.
//! - `Invitation` and `Attendance` are independent join records; neither
//!   requires the other to exist.

pub mod event;
pub mod relation;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Domain validation errors raised before any persistence happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// User name is empty or whitespace only.
    EmptyUserName,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUserName => write!(f, "user name is required"),
        }
    }
}

impl Error for ModelValidationError {}

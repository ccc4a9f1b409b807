//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers (CLI, controllers) decoupled from storage details.

pub mod directory_service;
pub mod relationship_service;

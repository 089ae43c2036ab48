//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the entity-scoped operations the
//!   rest of the system consumes.
//! - Keep callers decoupled from SQL and row-shape details.

pub mod author_service;
pub mod magazine_service;

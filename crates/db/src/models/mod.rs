//! Row models and create DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO built from the validated form

pub mod message;
pub mod profile;

//! Domain layer for the Folio portfolio site.
//!
//! Holds the error type shared by every crate, the form DTOs with their
//! validation rules, and the asset store used for uploaded profile images.

pub mod asset_store;
pub mod contact;
pub mod error;
pub mod profile;
pub mod types;

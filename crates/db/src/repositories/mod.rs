//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&SqlitePool` as the first argument.

pub mod message_repo;
pub mod profile_repo;

pub use message_repo::MessageRepo;
pub use profile_repo::ProfileRepo;

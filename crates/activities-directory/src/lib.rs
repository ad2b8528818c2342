//! Activity directory — the in-memory store behind the signup API.
//!
//! Holds every extracurricular activity keyed by name, validates request
//! values at the boundary ([`ActivityName`], [`Email`]) and performs the
//! signup/unregister check-then-mutate steps under a single lock.

pub mod directory;
pub mod seed;
pub mod types;

pub use directory::{Directory, DirectorySnapshot};
pub use types::{ActivityName, ActivityRecord, Email};

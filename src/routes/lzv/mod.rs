//! Read-only mirror of the external league site.

pub mod matches;
pub mod players;
pub mod stats;
pub mod team;

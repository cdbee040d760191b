//! Type-safe wrappers for NHL API identifiers.

pub mod ids;
pub mod time;

pub use ids::{GameId, PlayerId, TeamCode};
pub use time::{GameType, Season};

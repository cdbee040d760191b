//! NHL Stats CLI Library
//!
//! Fetches a resource from the public NHL web API (`api-web.nhle.com/v1`)
//! and saves the JSON payload to disk with four-space indentation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::commands::fetch::{handle_fetch, FetchParams};
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! // Player 8478402's 2023-24 regular-season game log -> player_data.json
//! handle_fetch(FetchParams::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nhl;

// Re-export commonly used types
pub use cli::types::{GameId, GameType, PlayerId, Season, TeamCode};
pub use error::{NhlError, Result};
pub use nhl::{Endpoint, RequestConfig};

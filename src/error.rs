//! Error types for the NHL stats CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse numeric ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid season: {season} (expected e.g. 20232024 or 2023-24)")]
    InvalidSeason { season: String },

    #[error("Invalid game type: {game_type} (expected 1, 2, 3, R or P)")]
    InvalidGameType { game_type: String },

    #[error("Invalid team code: {team} (expected three letters, e.g. TOR)")]
    InvalidTeamCode { team: String },
}

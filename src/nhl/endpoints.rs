//! Paths of the `api-web.nhle.com/v1` resources this tool can fetch.

use std::fmt;

use crate::cli::types::{GameId, GameType, PlayerId, Season, TeamCode};


/// Base URL of the public NHL web API.
pub const NHL_API_BASE_URL: &str = "https://api-web.nhle.com/v1/";

/// A single NHL API resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Game-by-game log for one player, season and game type.
    PlayerGameLog {
        player: PlayerId,
        season: Season,
        game_type: GameType,
    },
    /// Player bio and career totals.
    PlayerInfo { player: PlayerId },
    /// League standings as of today.
    Standings,
    TeamInfo { team: TeamCode },
    TeamRoster { team: TeamCode, season: Season },
    Boxscore { game: GameId },
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::PlayerGameLog {
            player: PlayerId::default(),
            season: Season::default(),
            game_type: GameType::default(),
        }
    }
}

impl Endpoint {
    /// Path relative to the API base, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Endpoint::PlayerGameLog {
                player,
                season,
                game_type,
            } => format!("player/{player}/game-log/{season}/{game_type}"),
            Endpoint::PlayerInfo { player } => format!("player/{player}/landing"),
            Endpoint::Standings => "standings/now".to_string(),
            Endpoint::TeamInfo { team } => format!("team/{team}/landing"),
            Endpoint::TeamRoster { team, season } => format!("roster/{team}/{season}"),
            Endpoint::Boxscore { game } => format!("gamecenter/{game}/boxscore"),
        }
    }

    /// Full URL under `base`. The base may or may not end in `/`.
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{GameId, GameType, PlayerId, Season, TeamCode};

use crate::{
    commands::fetch::FetchParams,
    core::DEFAULT_OUTPUT_FILE,
    nhl::{endpoints::NHL_API_BASE_URL, Endpoint, RequestConfig},
};


#[derive(Debug, Parser)]
#[clap(
    name = "nhl-stats",
    version,
    about = "Fetch NHL API data and save it as JSON",
    long_about = "Fetch one resource from the NHL web API and save it as indented JSON.\n\n\
                  With no subcommand, fetches the 2023-24 regular-season game log of \
                  player 8478402 into player_data.json."
)]
pub struct NhlStats {
    /// API base URL.
    #[clap(long, global = true, default_value = NHL_API_BASE_URL)]
    pub base_url: String,

    /// File to write; overwritten if it exists.
    #[clap(long, short, global = true, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Print request URL and headers for debugging.
    #[clap(long, global = true)]
    pub debug: bool,

    /// Print the request URL before fetching.
    #[clap(long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<FetchCmd>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FetchCmd {
    /// A player's game-by-game log (the default).
    GameLog {
        /// NHL player ID.
        #[clap(long, short, default_value_t = PlayerId::default())]
        player_id: PlayerId,

        /// Season, e.g. 20232024 or 2023-24.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Game type: 1/preseason, 2/R/regular, 3/P/playoffs.
        #[clap(long, short, default_value_t = GameType::default())]
        game_type: GameType,
    },

    /// Player bio and career statistics.
    Player {
        /// NHL player ID.
        #[clap(long, short, default_value_t = PlayerId::default())]
        player_id: PlayerId,
    },

    /// Current league standings.
    Standings,

    /// Team overview.
    Team {
        /// Three-letter team code, e.g. TOR.
        team: TeamCode,
    },

    /// Team roster for a season.
    Roster {
        /// Three-letter team code, e.g. TOR.
        team: TeamCode,

        /// Season, e.g. 20232024 or 2023-24.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },

    /// Boxscore of a single game.
    Boxscore {
        /// Game ID, e.g. 2023020204.
        game_id: GameId,
    },
}

impl From<FetchCmd> for Endpoint {
    fn from(cmd: FetchCmd) -> Self {
        match cmd {
            FetchCmd::GameLog {
                player_id,
                season,
                game_type,
            } => Endpoint::PlayerGameLog {
                player: player_id,
                season,
                game_type,
            },
            FetchCmd::Player { player_id } => Endpoint::PlayerInfo { player: player_id },
            FetchCmd::Standings => Endpoint::Standings,
            FetchCmd::Team { team } => Endpoint::TeamInfo { team },
            FetchCmd::Roster { team, season } => Endpoint::TeamRoster { team, season },
            FetchCmd::Boxscore { game_id } => Endpoint::Boxscore { game: game_id },
        }
    }
}

impl NhlStats {
    /// Resolve parsed arguments into the parameters of a fetch run.
    pub fn into_fetch_params(self) -> FetchParams {
        FetchParams {
            request: RequestConfig {
                base_url: self.base_url,
                endpoint: self.command.map(Endpoint::from).unwrap_or_default(),
                debug: self.debug,
            },
            output: self.output,
            verbose: self.verbose,
        }
    }
}

//! Core Connect Four game logic: board representation, player types, win
//! detection, and the turn state machine.

mod board;
pub mod label;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use label::{column_index, column_label};
pub use player::{Player, PlayerId};
pub use state::{GameState, GameStatus};
pub use win::{evaluate, GameOutcome, Orientation, WinningRun, CONNECT};

use crate::config::GameConfig;

/// Start a game with the players described by `config`.
pub fn new_game(config: &GameConfig) -> GameState {
    GameState::new(config.players())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlayerConfig, PlayersConfig};

    #[test]
    fn test_new_game_uses_configured_players() {
        let config = GameConfig {
            players: PlayersConfig {
                one: PlayerConfig {
                    name: "Ada".to_string(),
                    token: "X".to_string(),
                },
                two: PlayerConfig {
                    name: "Grace".to_string(),
                    token: "O".to_string(),
                },
            },
        };

        let state = new_game(&config);
        assert!(state.board().is_empty());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.active_id(), PlayerId::One);
        assert_eq!(state.active_player().name(), "Ada");
        assert_eq!(state.player(PlayerId::One).token(), "X");
        assert_eq!(state.player(PlayerId::Two).name(), "Grace");
        assert_eq!(state.player(PlayerId::Two).token(), "O");
    }
}

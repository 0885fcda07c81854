use tracing::debug;

use super::board::Board;
use super::label;
use super::player::{Player, PlayerId};
use super::win::{self, GameOutcome, WinningRun};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Drawn,
}

/// One game from the first move to a win or a draw. Player one moves first;
/// the active player only changes after a move that did not end the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    active: PlayerId,
    status: GameStatus,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state for the given players.
    pub fn new(players: [Player; 2]) -> Self {
        GameState {
            board: Board::new(),
            players,
            active: PlayerId::One,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(owner) => Some(GameOutcome::Win(owner)),
            GameStatus::Drawn => Some(GameOutcome::Draw),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn active_id(&self) -> PlayerId {
        self.active
    }

    /// The player whose turn it is, or who made the final move once the game
    /// is over.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }

    /// Columns played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Columns that can still take a token. Empty once the game is over.
    pub fn available_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.available_columns()
    }

    /// Same as [`available_columns`](Self::available_columns), as letters.
    pub fn available_labels(&self) -> Vec<char> {
        label::labels_for(&self.available_columns())
    }

    /// The run that ended the game, if it was won.
    pub fn winning_run(&self) -> Option<WinningRun> {
        match self.status {
            GameStatus::Won(_) => win::find_winning_run(&self.board),
            _ => None,
        }
    }

    /// Play the active player's token into `column` and evaluate the result.
    ///
    /// Fails without touching the state when the game is over or the column
    /// cannot take a token.
    pub fn advance(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let available = self.board.available_columns();
        if !available.contains(&column) {
            return Err(MoveError::InvalidColumn { column, available });
        }

        let row = self.board.drop(column, self.active)?;
        self.moves.push(column);
        debug!(
            player = self.active.number(),
            column,
            row,
            move_number = self.moves.len(),
            "token dropped"
        );

        let outcome = win::evaluate(&self.board);
        match outcome {
            Some(GameOutcome::Win(owner)) => self.status = GameStatus::Won(owner),
            Some(GameOutcome::Draw) => self.status = GameStatus::Drawn,
            None => self.active = self.active.other(),
        }

        Ok(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new([
            Player::default_for(PlayerId::One),
            Player::default_for(PlayerId::Two),
        ])
    }
}

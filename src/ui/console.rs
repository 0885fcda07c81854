//! Line-based front end: prompts for column letters on a reader and prints the
//! grid to a writer.

use std::io::{self, BufRead, Write};

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::game::{column_label, Cell, GameOutcome, GameState, PlayerId, HEIGHT, WIDTH};
use crate::input::parse_column_choice;

/// Render the grid top row first, with the column letters underneath.
///
/// Every cell is padded to the display width of the widest token, so emoji
/// tokens keep the column borders lined up.
pub fn render_board(state: &GameState) -> String {
    let board = state.board();
    let slot = [PlayerId::One, PlayerId::Two]
        .into_iter()
        .map(|id| state.player(id).token().width())
        .max()
        .unwrap_or(1)
        .max(1);
    let mut out = String::from("\n");

    for row in (0..HEIGHT).rev() {
        for col in 0..WIDTH {
            out.push_str("| ");
            match board.get(col, row) {
                Cell::Empty => pad(&mut out, slot),
                Cell::Occupied(owner) => {
                    let token = state.player(owner).token();
                    out.push_str(token);
                    pad(&mut out, slot - token.width());
                }
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }

    out.push_str(&"-".repeat(WIDTH * (slot + 3) + 1));
    out.push('\n');
    for col in 0..WIDTH {
        out.push_str("| ");
        out.push(column_label(col).unwrap_or(' '));
        pad(&mut out, slot - 1);
        out.push(' ');
    }
    out.push_str("|\n");
    out
}

fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat(' ').take(width));
}

/// Plays one game to completion over a reader/writer pair.
pub struct ConsoleGame<R, W> {
    state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(state: GameState, input: R, output: W) -> Self {
        ConsoleGame {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the game ends. Running out of input first is an
    /// `UnexpectedEof` error.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        self.introduction()?;
        self.display_board()?;

        loop {
            if let Some(outcome) = self.state.outcome() {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let column = self.receive_column()?;
            if let Err(err) = self.state.advance(column) {
                writeln!(self.output, "Sorry, {err}.")?;
                continue;
            }
            self.display_board()?;
        }
    }

    fn introduction(&mut self) -> io::Result<()> {
        let one = self.state.player(PlayerId::One).clone();
        let two = self.state.player(PlayerId::Two).clone();
        writeln!(
            self.output,
            "Welcome to Connect Four! Drop tokens into the grid from the top and try to \
             connect four before your opponent! You win by getting 4 consecutive tokens - \
             horizontally, vertically, or diagonally."
        )?;
        writeln!(self.output, "  {}'s token: {}", one.name(), one.token())?;
        writeln!(self.output, "  {}'s token: {}", two.name(), two.token())
    }

    fn display_board(&mut self) -> io::Result<()> {
        let board = render_board(&self.state);
        write!(self.output, "{board}")?;
        self.output.flush()
    }

    /// Prompt until the player names an available column.
    fn receive_column(&mut self) -> io::Result<usize> {
        loop {
            let available = self.state.available_columns();
            let labels: String = self.state.available_labels().into_iter().collect();
            let player = self.state.active_player();
            writeln!(
                self.output,
                "{} ({}), please input a column from the available columns ({}).",
                player.name(),
                player.token(),
                labels
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before the game finished",
                ));
            }

            match parse_column_choice(&line, &available) {
                Ok(column) => return Ok(column),
                Err(err) => {
                    debug!(%err, "rejected column choice");
                    writeln!(
                        self.output,
                        "Sorry, {}'s not an available column.",
                        line.trim().to_uppercase()
                    )?;
                }
            }
        }
    }

    fn announce(&mut self, outcome: GameOutcome) -> io::Result<()> {
        match outcome {
            GameOutcome::Win(owner) => {
                let name = self.state.player(owner).name().to_string();
                writeln!(self.output, "\u{1f386}\u{1f386} {name} wins! \u{1f386}\u{1f386}")
            }
            GameOutcome::Draw => writeln!(self.output, "It's a draw! The board is full."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};

    fn lettered_game() -> GameState {
        GameState::new([
            Player::new(PlayerId::One, "Ada", "X"),
            Player::new(PlayerId::Two, "Grace", "O"),
        ])
    }

    fn run_script(script: &str) -> (io::Result<GameOutcome>, String) {
        let mut output = Vec::new();
        let mut game = ConsoleGame::new(lettered_game(), script.as_bytes(), &mut output);
        let result = game.run();
        drop(game);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&lettered_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "|   |   |   |   |   |   |   |");
        assert_eq!(lines[7], "-----------------------------");
        assert_eq!(lines[8], "| A | B | C | D | E | F | G |");
    }

    #[test]
    fn test_render_puts_row_zero_at_bottom() {
        let mut state = lettered_game();
        state.advance(0).unwrap();
        state.advance(0).unwrap();
        let text = render_board(&state);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "| X |   |   |   |   |   |   |");
        assert_eq!(lines[5], "| O |   |   |   |   |   |   |");
    }

    #[test]
    fn test_scripted_win() {
        let (result, output) = run_script("a\na\nb\nb\nc\nc\nd\n");
        assert_eq!(result.unwrap(), GameOutcome::Win(PlayerId::One));
        assert!(output.starts_with("Welcome to Connect Four!"));
        assert!(output.contains("Ada (X), please input a column from the available columns (ABCDEFG)."));
        assert!(output.contains("Ada wins!"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let script = "a\na\na\na\na\na\nh\na\nzz\n\nb\nc\nb\nc\nb\nc\nb\n";
        let (result, output) = run_script(script);
        assert_eq!(result.unwrap(), GameOutcome::Win(PlayerId::One));
        assert!(output.contains("Sorry, H's not an available column."));
        assert!(output.contains("Sorry, A's not an available column."));
        assert!(output.contains("Sorry, ZZ's not an available column."));
        assert!(output.contains("available columns (BCDEFG)"));
    }

    #[test]
    fn test_scripted_draw() {
        let columns = [
            5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, 0, 4, 2, 3, 0, 3, 4,
            2, 3, 2, 6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
        ];
        let script: String = columns
            .iter()
            .map(|&col| format!("{}\n", column_label(col).unwrap()))
            .collect();
        let (result, output) = run_script(&script);
        assert_eq!(result.unwrap(), GameOutcome::Draw);
        assert!(output.ends_with("It's a draw! The board is full.\n"));
    }

    #[test]
    fn test_render_default_tokens_keep_columns_aligned() {
        let mut state = GameState::default();
        for col in [3, 3, 4, 0, 6] {
            state.advance(col).unwrap();
        }
        let text = render_board(&state);
        let widths: Vec<usize> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(UnicodeWidthStr::width)
            .collect();
        assert_eq!(widths.len(), HEIGHT + 2);
        assert!(widths.iter().all(|&w| w == widths[0]), "ragged rows: {widths:?}");
        assert!(text.contains("| \u{26aa} | \u{26aa} |"));
    }

    #[test]
    fn test_finished_game_state() {
        let mut output = Vec::new();
        let script = "a\nb\na\nb\na\nb\na\n";
        let mut game = ConsoleGame::new(lettered_game(), script.as_bytes(), &mut output);
        assert!(game.state().moves().is_empty());

        assert_eq!(game.run().unwrap(), GameOutcome::Win(PlayerId::One));
        let state = game.state();
        assert_eq!(state.status(), GameStatus::Won(PlayerId::One));
        assert_eq!(state.moves(), &[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.active_player().name(), "Ada");
    }

    #[test]
    fn test_input_ends_early() {
        let (result, output) = run_script("a\nb\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(!output.contains("wins!"));
    }
}

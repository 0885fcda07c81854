//! Win and draw detection over a board snapshot.
//!
//! Every line of the grid (rows, columns and both diagonal directions) is
//! scanned with the same run tracker. A win requires an unbroken run of
//! [`CONNECT`] tokens of one owner; tokens separated by an empty cell or an
//! opposing token never add up.

use std::sync::LazyLock;

use tracing::{debug, instrument};

use super::board::{Board, Cell, HEIGHT, WIDTH};
use super::player::PlayerId;

/// Length of the run that wins the game.
pub const CONNECT: usize = 4;

/// `(column, row)`, row 0 at the bottom.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(PlayerId),
    Draw,
}

/// The four line directions checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row, left to right.
    Horizontal,
    /// Up a column, bottom to top.
    Vertical,
    /// Bottom-left to top-right.
    Ascending,
    /// Top-left to bottom-right.
    Descending,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Ascending,
        Orientation::Descending,
    ];

    /// The cell after this one along this orientation, if it is still on the board.
    fn step(self, (col, row): Coord) -> Option<Coord> {
        let (col, row) = match self {
            Orientation::Horizontal => (col + 1, row),
            Orientation::Vertical => (col, row + 1),
            Orientation::Ascending => (col + 1, row + 1),
            Orientation::Descending => (col + 1, row.checked_sub(1)?),
        };
        (col < WIDTH && row < HEIGHT).then_some((col, row))
    }

    /// First cell of every maximal line in this orientation.
    fn starts(self) -> Vec<Coord> {
        match self {
            Orientation::Horizontal => (0..HEIGHT).map(|row| (0, row)).collect(),
            Orientation::Vertical => (0..WIDTH).map(|col| (col, 0)).collect(),
            // Bottom row, then the rest of the left column.
            Orientation::Ascending => (0..WIDTH)
                .map(|col| (col, 0))
                .chain((1..HEIGHT).map(|row| (0, row)))
                .collect(),
            // Top row, then the rest of the left column.
            Orientation::Descending => (0..WIDTH)
                .map(|col| (col, HEIGHT - 1))
                .chain((0..HEIGHT - 1).map(|row| (0, row)))
                .collect(),
        }
    }

    fn walk(self, start: Coord) -> Vec<Coord> {
        std::iter::successors(Some(start), |&at| self.step(at)).collect()
    }
}

/// One maximal line of cells in a single orientation.
#[derive(Debug, Clone)]
struct Line {
    orientation: Orientation,
    cells: Vec<Coord>,
}

/// Every line of the board. The dimensions are fixed, so this is built once.
static LINES: LazyLock<Vec<Line>> = LazyLock::new(|| {
    Orientation::ALL
        .into_iter()
        .flat_map(|orientation| {
            orientation.starts().into_iter().map(move |start| Line {
                orientation,
                cells: orientation.walk(start),
            })
        })
        .collect()
});

/// A completed run of [`CONNECT`] tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    pub owner: PlayerId,
    pub orientation: Orientation,
    pub cells: [Coord; CONNECT],
}

impl WinningRun {
    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }
}

/// Tracks the current run of same-owner tokens while walking one line.
#[derive(Debug, Default)]
struct RunTracker {
    run_owner: Option<PlayerId>,
    run_length: usize,
}

impl RunTracker {
    /// Feed the next cell; returns the owner once the run reaches [`CONNECT`].
    fn push(&mut self, cell: Cell) -> Option<PlayerId> {
        match cell {
            Cell::Empty => {
                self.run_owner = None;
                self.run_length = 0;
            }
            Cell::Occupied(owner) if self.run_owner == Some(owner) => {
                self.run_length += 1;
            }
            Cell::Occupied(owner) => {
                self.run_owner = Some(owner);
                self.run_length = 1;
            }
        }

        if self.run_length >= CONNECT {
            self.run_owner
        } else {
            None
        }
    }
}

fn scan_line(board: &Board, line: &Line) -> Option<WinningRun> {
    if line.cells.len() < CONNECT {
        return None;
    }

    let mut tracker = RunTracker::default();
    for (idx, &(col, row)) in line.cells.iter().enumerate() {
        if let Some(owner) = tracker.push(board.get(col, row)) {
            let mut cells = [(0, 0); CONNECT];
            cells.copy_from_slice(&line.cells[idx + 1 - CONNECT..=idx]);
            return Some(WinningRun {
                owner,
                orientation: line.orientation,
                cells,
            });
        }
    }
    None
}

/// Find the first completed run, scanning rows, then columns, then ascending
/// and descending diagonals.
pub fn find_winning_run(board: &Board) -> Option<WinningRun> {
    LINES.iter().find_map(|line| scan_line(board, line))
}

/// Classify a board: a win for whoever owns a completed run, a draw when no
/// column is left, otherwise `None`.
#[instrument(level = "trace", skip(board), fields(tokens = board.token_count()))]
pub fn evaluate(board: &Board) -> Option<GameOutcome> {
    if let Some(run) = find_winning_run(board) {
        debug!(
            owner = run.owner.number(),
            orientation = ?run.orientation,
            cells = ?run.cells,
            "winning run found"
        );
        return Some(GameOutcome::Win(run.owner));
    }

    if board.available_columns().is_empty() {
        debug!("board full without a winner");
        return Some(GameOutcome::Draw);
    }

    None
}

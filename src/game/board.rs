use std::fmt;

use serde::{Deserialize, Serialize};

/// Coat color of a cat token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatColor {
    White,
    Black,
    Brown,
    Gray,
    Ginger,
    Calico,
}

impl CatColor {
    pub fn name(self) -> &'static str {
        match self {
            CatColor::White => "white",
            CatColor::Black => "black",
            CatColor::Brown => "brown",
            CatColor::Gray => "gray",
            CatColor::Ginger => "ginger",
            CatColor::Calico => "calico",
        }
    }
}

impl fmt::Display for CatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Cat(CatColor),
}

impl Cell {
    pub fn color(self) -> Option<CatColor> {
        match self {
            Cell::Empty => None,
            Cell::Cat(color) => Some(color),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Which part of a cat a cell shows, based on its same-colored neighbors
/// directly above and below.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatPart {
    /// Top of a run of two or more.
    Head,
    Body,
    /// Bottom of a run of two or more.
    Tail,
    Single,
}

impl CatPart {
    /// Heads and singles are where the face goes.
    pub fn has_face(self) -> bool {
        matches!(self, CatPart::Head | CatPart::Single)
    }
}

/// Why a column-to-column move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is off the board")]
    InvalidColumn(usize),

    #[error("column {0} has no cat to move")]
    EmptySource(usize),

    #[error("cannot move a cat onto its own column")]
    SameColumn,

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("a {moving} cat cannot sit on a {target} cat")]
    ColorMismatch { moving: CatColor, target: CatColor },
}

/// Where a moved cat came from and where it landed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    pub color: CatColor,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// A `rows x cols` grid indexed `[row][col]`. Row 0 is the top, the last
/// row is the floor every column stacks up from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
}

impl Board {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; cols]; rows],
            rows,
            cols,
        }
    }

    /// Builds a board from explicit rows, top row first. Returns `None` when
    /// the rows are ragged, there are none, or a cat floats above an empty
    /// cell.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Option<Self> {
        let rows = cells.len();
        let cols = cells.first()?.len();
        if cols == 0 || cells.iter().any(|row| row.len() != cols) {
            return None;
        }
        let board = Self { cells, rows, cols };
        board.is_settled().then_some(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Topmost occupied row in `col`, scanning down from row 0.
    pub fn top_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| !self.cells[row][col].is_empty())
    }

    pub fn top_cat(&self, col: usize) -> Option<(usize, CatColor)> {
        let row = self.top_row(col)?;
        self.cells[row][col].color().map(|color| (row, color))
    }

    /// Row a cat dropped onto `col` would occupy, or `None` if the column is
    /// full or off the board.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        match self.top_row(col) {
            None => self.rows.checked_sub(1),
            Some(0) => None,
            Some(top) => Some(top - 1),
        }
    }

    pub fn is_column_empty(&self, col: usize) -> bool {
        self.top_row(col).is_none()
    }

    /// Moves the top cat of `from` onto `to` if it fits: the target must have
    /// room and be either empty or topped by a cat of the same color.
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<Placement, MoveError> {
        for col in [from, to] {
            if col >= self.cols {
                return Err(MoveError::InvalidColumn(col));
            }
        }
        if from == to {
            return Err(MoveError::SameColumn);
        }

        let (from_row, color) = self.top_cat(from).ok_or(MoveError::EmptySource(from))?;
        let landing = self.landing_row(to).ok_or(MoveError::ColumnFull(to))?;

        if let Some((_, target)) = self.top_cat(to) {
            if target != color {
                return Err(MoveError::ColorMismatch {
                    moving: color,
                    target,
                });
            }
        }

        self.set(from_row, from, Cell::Empty);
        self.set(landing, to, Cell::Cat(color));

        Ok(Placement {
            color,
            from: (from_row, from),
            to: (landing, to),
        })
    }

    /// Color of `col` when every one of its cells holds that same cat.
    pub fn completed_color(&self, col: usize) -> Option<CatColor> {
        let first = self.get(0, col)?.color()?;
        (1..self.rows)
            .all(|row| self.cells[row][col] == Cell::Cat(first))
            .then_some(first)
    }

    pub fn clear_column(&mut self, col: usize) {
        for row in self.cells.iter_mut() {
            if let Some(cell) = row.get_mut(col) {
                *cell = Cell::Empty;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }

    pub fn count(&self, color: CatColor) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Cat(color))
            .count()
    }

    /// Longest same-color streak in `col`, read from the floor upwards.
    /// Empty cells break a streak.
    pub fn longest_run(&self, col: usize) -> usize {
        let mut longest = 0;
        let mut streak = 0;
        let mut last = None;

        for row in (0..self.rows).rev() {
            match self.cells[row][col].color() {
                Some(color) if last == Some(color) => streak += 1,
                Some(color) => {
                    streak = 1;
                    last = Some(color);
                }
                None => {
                    streak = 0;
                    last = None;
                }
            }
            longest = longest.max(streak);
        }

        longest
    }

    pub fn respects_run_limit(&self, max_run: usize) -> bool {
        (0..self.cols).all(|col| self.longest_run(col) <= max_run)
    }

    /// True when no column has an empty cell beneath a cat.
    pub fn is_settled(&self) -> bool {
        (0..self.cols).all(|col| match self.top_row(col) {
            Some(top) => (top..self.rows).all(|row| !self.cells[row][col].is_empty()),
            None => true,
        })
    }

    pub fn segment_at(&self, row: usize, col: usize) -> Option<CatPart> {
        let color = self.get(row, col)?.color()?;
        let same = |r: usize| self.get(r, col).and_then(Cell::color) == Some(color);

        let above = row > 0 && same(row - 1);
        let below = same(row + 1);

        Some(match (above, below) {
            (true, true) => CatPart::Body,
            (true, false) => CatPart::Tail,
            (false, true) => CatPart::Head,
            (false, false) => CatPart::Single,
        })
    }
}

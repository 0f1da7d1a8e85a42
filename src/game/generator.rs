use rand::Rng;

use crate::config::GameConfig;
use crate::constants::MAX_DEALT_RUN;
use crate::game::board::{Board, CatColor, Cell};

/// Result of dealing a starting board.
#[derive(Clone, Debug)]
pub struct GeneratedBoard {
    pub board: Board,
    /// Number of deals tried, including the accepted one.
    pub attempts: u32,
    /// Set when every attempt broke the run-length rule and the last deal was
    /// kept anyway.
    pub degraded: bool,
}

/// Deals shuffled cats into all but the reserved columns, redealing until no
/// column starts with more than [`MAX_DEALT_RUN`] same-colored cats in a row.
pub struct Generator<'a> {
    config: &'a GameConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedBoard {
        let cap = self.config.generation_retry_cap.max(1);
        let mut attempts = 0;

        loop {
            let board = self.deal(rng);
            attempts += 1;

            if board.respects_run_limit(MAX_DEALT_RUN) {
                tracing::debug!(attempts, "dealt a fair board");
                return GeneratedBoard {
                    board,
                    attempts,
                    degraded: false,
                };
            }

            if attempts >= cap {
                tracing::warn!(
                    attempts,
                    "could not deal a board without long runs, keeping the last one"
                );
                return GeneratedBoard {
                    board,
                    attempts,
                    degraded: true,
                };
            }
        }
    }

    /// One shuffled deal, unchecked.
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut supply = self.fill_supply();

        // Fisher-Yates shuffle
        for i in (1..supply.len()).rev() {
            let j = rng.gen_range(0..=i);
            supply.swap(i, j);
        }

        let mut board = Board::empty(self.config.rows, self.config.cols);
        for col in 0..self.config.dealt_columns() {
            for row in 0..self.config.rows {
                let cell = supply.pop().map_or(Cell::Empty, Cell::Cat);
                board.set(row, col, cell);
            }
        }
        board
    }

    fn fill_supply(&self) -> Vec<CatColor> {
        self.config
            .palette
            .iter()
            .flat_map(|&color| std::iter::repeat(color).take(self.config.cats_per_color))
            .collect()
    }
}

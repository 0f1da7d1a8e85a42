use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::game::board::{Board, CatColor, MoveError, Placement};
use crate::game::event::GameEvent;
use crate::game::generator::Generator;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    InProgress,
    Cleared,
}

/// What a single column activation did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Activation {
    /// Nothing happened: empty column with no selection, or off the board.
    Ignored,
    Selected { column: usize, row: usize },
    /// The selected column was activated again.
    Deselected,
    Moved(Placement),
    Rejected {
        from: usize,
        to: usize,
        reason: MoveError,
    },
}

/// One game session: the board, the pending selection and the move count.
pub struct Game {
    config: GameConfig,
    board: Board,
    selected: Option<usize>,
    moves: u32,
    game_state: GameState,
    events: Vec<GameEvent>,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let board = Board::empty(config.rows, config.cols);
        let mut game = Self {
            config,
            board,
            selected: None,
            moves: 0,
            game_state: GameState::InProgress,
            events: Vec::new(),
            rng,
        };
        game.reset();
        game
    }

    /// Starts a session on a prepared board. Later resets deal from `config`.
    pub fn from_board(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            selected: None,
            moves: 0,
            game_state: GameState::InProgress,
            events: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deals a fresh board and forgets everything about the previous one.
    pub fn reset(&mut self) {
        let generated = Generator::new(&self.config).generate(&mut self.rng);

        self.board = generated.board;
        self.selected = None;
        self.moves = 0;
        self.game_state = GameState::InProgress;
        self.events.clear();

        if generated.degraded {
            self.events.push(GameEvent::GenerationDegraded {
                attempts: generated.attempts,
            });
        }
        tracing::info!(attempts = generated.attempts, "new board dealt");
    }

    pub fn on_column_activated(&mut self, column: usize) -> Activation {
        let Some(from) = self.selected.take() else {
            return match self.board.top_row(column) {
                Some(row) => {
                    self.selected = Some(column);
                    Activation::Selected { column, row }
                }
                None => Activation::Ignored,
            };
        };

        if column >= self.board.cols() {
            return Activation::Ignored;
        }
        if from == column {
            return Activation::Deselected;
        }

        match self.board.try_move(from, column) {
            Ok(placement) => {
                self.moves += 1;
                self.events.push(GameEvent::MoveApplied {
                    from,
                    to: column,
                    color: placement.color,
                });
                tracing::debug!(from, to = column, color = %placement.color, moves = self.moves, "move applied");
                self.check_win();
                Activation::Moved(placement)
            }
            Err(reason) => {
                tracing::debug!(from, to = column, %reason, "move rejected");
                Activation::Rejected {
                    from,
                    to: column,
                    reason,
                }
            }
        }
    }

    /// Clears every column that is full of one color, then checks whether the
    /// whole board is gone.
    fn check_win(&mut self) {
        for column in 0..self.board.cols() {
            if let Some(color) = self.board.completed_color(column) {
                self.board.clear_column(column);
                self.events.push(GameEvent::ColumnCleared { column, color });
                tracing::info!(column, %color, "column complete");
            }
        }
        self.check_game_clear();
    }

    fn check_game_clear(&mut self) {
        if self.game_state == GameState::InProgress && self.board.is_empty() {
            self.game_state = GameState::Cleared;
            self.events.push(GameEvent::GameCleared);
            tracing::info!(moves = self.moves, "game clear");
        }
    }

    /// Drops the pending selection without counting as an activation.
    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    /// Drains queued notifications in the order they were raised.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Row and color of the cat that would move next, if a column is selected.
    pub fn selected_cat(&self) -> Option<(usize, usize, CatColor)> {
        let column = self.selected?;
        let (row, color) = self.board.top_cat(column)?;
        Some((row, column, color))
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_cleared(&self) -> bool {
        self.game_state == GameState::Cleared
    }

    /// Palette colors that still have cats on the board.
    pub fn colors_remaining(&self) -> Vec<CatColor> {
        self.config
            .palette
            .iter()
            .copied()
            .filter(|&color| self.board.count(color) > 0)
            .collect()
    }
}

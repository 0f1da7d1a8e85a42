pub mod board;
pub mod event;
pub mod generator;
pub mod state;

pub use board::{Board, CatColor, CatPart, Cell, MoveError, Placement};
pub use event::GameEvent;
pub use generator::{GeneratedBoard, Generator};
pub use state::{Activation, Game, GameState};

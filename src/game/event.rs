use crate::game::board::CatColor;

/// Notifications queued by [`Game`](crate::game::Game) for whatever draws
/// the board. Nothing in the game logic depends on them being consumed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    MoveApplied {
        from: usize,
        to: usize,
        color: CatColor,
    },
    ColumnCleared {
        column: usize,
        color: CatColor,
    },
    GameCleared,
    GenerationDegraded {
        attempts: u32,
    },
}

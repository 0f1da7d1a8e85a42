#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Left,
    Right,
}

impl CursorDirection {
    /// Moves `cursor` one column, wrapping at either edge.
    pub fn step(self, cursor: usize, cols: usize) -> usize {
        if cols == 0 {
            return 0;
        }
        match self {
            CursorDirection::Left => (cursor + cols - 1) % cols,
            CursorDirection::Right => (cursor + 1) % cols,
        }
    }
}

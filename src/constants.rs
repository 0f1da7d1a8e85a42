use crate::game::CatColor;

// Board dimensions for the default layout
pub const ROWS: usize = 5;
pub const COLS: usize = 6;

// Columns left empty at deal time for maneuvering
pub const RESERVED_COLUMNS: usize = 2;

pub const CATS_PER_COLOR: usize = 5;
pub const DEFAULT_PALETTE: [CatColor; 4] =
    [CatColor::White, CatColor::Black, CatColor::Brown, CatColor::Gray];

// Longest same-color run a freshly dealt column may contain
pub const MAX_DEALT_RUN: usize = 2;
pub const GENERATION_RETRY_CAP: u32 = 100;

// UI timing (in milliseconds)
pub const POLL_INTERVAL: u64 = 16;
pub const MESSAGE_TIMEOUT: u64 = 1500;

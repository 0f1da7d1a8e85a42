use std::time::Instant;

use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::game::{Activation, Game};
use crate::input::direction::CursorDirection;
use crate::ui::renderer::column_at;
use crate::ui::status::StatusMessage;

/// Front-end state layered over a [`Game`]: the keyboard cursor and the
/// current status line.
pub struct InputState {
    pub cursor: usize,
    pub status: Option<StatusMessage>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            status: None,
        }
    }

    pub fn move_cursor(&mut self, dir: CursorDirection, cols: usize) {
        self.cursor = dir.step(self.cursor, cols);
    }

    /// Activates `column` on the game and turns whatever it raised into a
    /// status message.
    pub fn activate(&mut self, game: &mut Game, column: usize) -> Activation {
        if column < game.board().cols() {
            self.cursor = column;
        }

        let activation = game.on_column_activated(column);
        if let Activation::Rejected { reason, .. } = activation {
            self.status = Some(StatusMessage::new(reason.to_string(), Color::DarkGray));
        }
        self.absorb_events(game);
        activation
    }

    pub fn absorb_events(&mut self, game: &mut Game) {
        for event in game.take_events() {
            if let Some(message) = StatusMessage::from_event(&event) {
                self.status = Some(message);
            }
        }
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.status = None;
        }
    }

    /// Shuffles a new board, keeping the cursor where it was.
    pub fn reshuffle(&mut self, game: &mut Game) {
        game.reset();
        self.status = None;
        self.cursor = self.cursor.min(game.board().cols().saturating_sub(1));
        self.absorb_events(game);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn handle_input(game: &mut Game, input: &mut InputState, key_code: KeyCode, kind: KeyEventKind) {
    if kind != KeyEventKind::Press {
        return;
    }

    let cols = game.board().cols();
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => {
            input.move_cursor(CursorDirection::Left, cols);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            input.move_cursor(CursorDirection::Right, cols);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            input.activate(game, input.cursor);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let column = c as usize - '1' as usize;
            input.activate(game, column);
        }
        KeyCode::Esc => {
            game.cancel_selection();
        }
        _ => {}
    }
}

pub fn handle_mouse(game: &mut Game, input: &mut InputState, mouse: MouseEvent, board_area: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(column) = column_at(board_area, game.board().cols(), mouse.column, mouse.row) {
            input.activate(game, column);
        }
    }
}

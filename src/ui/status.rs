use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::constants::MESSAGE_TIMEOUT;
use crate::game::GameEvent;

/// A short line of text shown under the board until it expires.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub color: Color,
    pub shown_at: Instant,
    /// Sticky messages stay until replaced.
    pub sticky: bool,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            shown_at: Instant::now(),
            sticky: false,
        }
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Message for a game notification. Plain moves don't get one.
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::MoveApplied { .. } => None,
            GameEvent::ColumnCleared { color, .. } => Some(Self::new(
                format!("Cat {color} is complete!"),
                Color::Cyan,
            )),
            GameEvent::GameCleared => Some(Self::new("Game Clear!", Color::Green).sticky()),
            GameEvent::GenerationDegraded { attempts } => Some(Self::new(
                format!("No fair deal after {attempts} tries, some cats start in long rows"),
                Color::Yellow,
            )),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        !self.sticky
            && now.duration_since(self.shown_at) >= Duration::from_millis(MESSAGE_TIMEOUT)
    }
}

//! # catstack
//!
//! A terminal puzzle about stacking cats. Columns of colored cats are dealt
//! at random; move the top cat of one column onto an empty column or onto a
//! cat of the same color until every color fills a column and clears.
//!
//! ## Modules
//!
//! - [`game`] - Board model, dealing, and the move/clear state machine
//! - [`config`] - Board parameters with TOML loading and validation
//! - [`error`] - Structured error types
//! - [`input`] - Keyboard and mouse handling for the terminal front end
//! - [`ui`] - Ratatui renderer

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. Players take turns
//! dropping tokens into a 7x6 grid; four of one player's tokens in an unbroken
//! line (horizontal, vertical or diagonal) wins, a full grid without one is a
//! draw.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn state machine
//! - [`input`] — Parsing typed column letters against the available columns
//! - [`ui`] — Full-screen terminal view and a line-based console game
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

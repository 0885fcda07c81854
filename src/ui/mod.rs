//! Front ends: a full-screen terminal game view and a line-based console game.

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::ConsoleGame;

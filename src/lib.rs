//! Tile-grid Snake for the terminal.
//!
//! [`game::GameEngine`] owns the board and runs the movement and food rules;
//! [`intake::IntakeForm`] validates the board size before an engine exists.
//! Everything under [`renderer`] and [`ui`] only mirrors the cell changes the
//! engine reports.

pub mod app;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod intake;
pub mod logging;
pub mod render_sink;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub mod app;
pub mod commands;
pub mod tui;

pub use app::{Cli, Mode};

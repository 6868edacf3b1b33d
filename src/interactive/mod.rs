//! Interactive TUI: the board, an on-screen keyboard and decorative effects

mod app;
pub mod effects;
pub mod rendering;

pub use app::{App, run_tui};

//! Interactive TUI interface
//!
//! Full-screen front end driving the same round controller as the console.

mod app;
mod rendering;

pub use app::{App, CrosstermKeys, InputMode, KeySource, Message, MessageStyle, Tui, run_tui};

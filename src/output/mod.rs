//! Terminal output
//!
//! Gallows art, formatting helpers and the line-based console front end.

pub mod console;
pub mod formatters;
pub mod frames;

pub use console::Console;

//! Appearance state: accent color and dark mode
//!
//! Converts between the stored theme identifier strings and the structured
//! appearance state, and pushes changes back to the active desktop
//! environment's settings backend.

pub mod commands;
pub mod identifiers;
pub mod palette;
pub mod sync;

pub use commands::{ThemeCommands, dispatch_theme_command};

//! Panel layout presets for the Cinnamon desktop

pub mod apply;
pub mod commands;
pub mod presets;

pub use commands::{LayoutCommands, dispatch_layout_command};

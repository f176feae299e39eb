//! First-steps actions for the welcome dialog
//!
//! Links to documentation and community resources, helper application
//! launching, and the login autostart flag.

pub mod autostart;
pub mod commands;

pub use commands::{
    AutostartCommands, Resource, dispatch_autostart_command, handle_info_command,
    handle_open_command,
};

//! Command handling for appearance state

use anyhow::{Context, Result, anyhow};
use clap::{Subcommand, ValueEnum};

use crate::desktop::DesktopEnvironment;
use crate::ui::prelude::*;

use super::identifiers::ThemeIdentifierSet;
use super::palette::Palette;
use super::sync::{apply_state, infer_state};

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommands {
    /// Show the current appearance state
    Status,
    /// List the selectable accent colors
    Colors,
    /// Select an accent color
    Color {
        /// Color name, e.g. green, aqua, blue
        color: String,
    },
    /// Enable, disable or toggle dark mode
    Dark {
        /// Omit to toggle the current setting
        state: Option<DarkState>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DarkState {
    On,
    Off,
}

pub fn dispatch_theme_command(command: ThemeCommands) -> Result<()> {
    if let ThemeCommands::Colors = command {
        // No backend needed to list the closed set
        for palette in Palette::ALL {
            let marker = if palette.is_default() { " (default)" } else { "" };
            emit(
                Level::Info,
                "theme.colors.entry",
                &format!("{} {}{marker}", char::from(NerdFont::Palette), palette.id()),
                None,
            );
        }
        return Ok(());
    }

    let environment = DesktopEnvironment::detect();
    let backend = environment
        .backend()
        .with_context(|| format!("preparing settings backend for {environment}"))?;

    match command {
        ThemeCommands::Colors => unreachable!("handled above"),
        ThemeCommands::Status => {
            let state = infer_state(backend.as_ref()).context("reading appearance state")?;
            let mode = if state.dark_mode { "dark" } else { "light" };
            let identifiers = ThemeIdentifierSet::compose(state);
            emit(
                Level::Info,
                "theme.status",
                &format!(
                    "{} Appearance on {}: {} ({mode})",
                    char::from(NerdFont::Palette),
                    environment,
                    state.palette
                ),
                Some(serde_json::json!({
                    "desktop": environment.name(),
                    "color": state.palette.id(),
                    "dark_mode": state.dark_mode,
                    "interface_theme": identifiers.interface,
                })),
            );
        }
        ThemeCommands::Color { color } => {
            let palette = Palette::from_id(&color).ok_or_else(|| {
                let known: Vec<&str> = Palette::ALL.iter().map(|p| p.id()).collect();
                anyhow!("unknown color '{color}', expected one of: {}", known.join(", "))
            })?;

            let mut state = infer_state(backend.as_ref()).context("reading appearance state")?;
            state.palette = palette;
            apply_state(backend.as_ref(), state).context("applying appearance state")?;

            emit(
                Level::Success,
                "theme.color.applied",
                &format!("{} Accent color set to {palette}", char::from(NerdFont::Check)),
                None,
            );
        }
        ThemeCommands::Dark { state: requested } => {
            let mut state = infer_state(backend.as_ref()).context("reading appearance state")?;
            state.dark_mode = match requested {
                Some(DarkState::On) => true,
                Some(DarkState::Off) => false,
                None => !state.dark_mode,
            };
            apply_state(backend.as_ref(), state).context("applying appearance state")?;

            let (icon, status) = if state.dark_mode {
                (NerdFont::Moon, "enabled")
            } else {
                (NerdFont::Sun, "disabled")
            };
            emit(
                Level::Success,
                "theme.dark.applied",
                &format!("{} Dark mode {status}", char::from(icon)),
                None,
            );
        }
    }

    Ok(())
}

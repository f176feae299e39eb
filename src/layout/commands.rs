//! Command handling for panel layout presets

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::desktop::{DesktopEnvironment, SettingsBackend};
use crate::ui::prelude::*;

use super::apply::{CinnamonShellReloader, apply_preset};
use super::presets::LayoutPreset;

#[derive(Subcommand, Debug, Clone)]
pub enum LayoutCommands {
    /// List the available panel layouts
    List,
    /// Apply a panel layout preset
    Apply {
        #[arg(value_enum)]
        preset: LayoutPreset,
    },
}

pub fn dispatch_layout_command(command: LayoutCommands) -> Result<()> {
    match command {
        LayoutCommands::List => {
            for preset in LayoutPreset::ALL {
                let data = preset.data();
                emit(
                    Level::Info,
                    "layout.list.entry",
                    &format!(
                        "{} {} ({}): {}",
                        char::from(NerdFont::List),
                        preset.id(),
                        data.title,
                        data.description
                    ),
                    None,
                );
            }
            Ok(())
        }
        LayoutCommands::Apply { preset } => {
            let environment = DesktopEnvironment::detect();
            let backend = environment
                .backend()
                .with_context(|| format!("preparing settings backend for {environment}"))?;

            let applied = apply_preset(backend.as_ref(), preset, &CinnamonShellReloader)
                .with_context(|| format!("applying panel layout '{preset}'"))?;

            if applied {
                emit(
                    Level::Success,
                    "layout.applied",
                    &format!(
                        "{} Panel layout '{preset}' applied, reloading the desktop",
                        char::from(NerdFont::Refresh)
                    ),
                    None,
                );
            } else {
                emit(
                    Level::Warn,
                    "layout.unsupported",
                    &format!(
                        "{} Panel layouts are only available on Cinnamon (detected {})",
                        char::from(NerdFont::Warning),
                        backend.environment(),
                    ),
                    None,
                );
            }
            Ok(())
        }
    }
}

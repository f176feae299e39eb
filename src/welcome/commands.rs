//! Command handling for first-steps actions

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};

use crate::common::distro::{MintRelease, USER_GUIDE_URL};
use crate::common::launch::{open_url, spawn_app};
use crate::desktop::DesktopEnvironment;
use crate::ui::prelude::*;

use super::autostart;

/// Documentation, community, and first-run resources reachable from the
/// welcome dialog
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Resource {
    /// User guide and documentation
    Documentation,
    /// Release notes for the installed release
    ReleaseNotes,
    /// What's new in the installed release
    NewFeatures,
    /// Community forums
    Forums,
    /// Live help chat room
    Chat,
    /// How to get involved in the project
    GetInvolved,
    /// Make a donation
    Donors,
    /// Software manager (mintinstall)
    Software,
    /// Driver manager (mintdrivers)
    Drivers,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AutostartCommands {
    /// Show the welcome dialog on login
    On,
    /// Do not show the welcome dialog on login
    Off,
    /// Show whether the dialog starts on login
    Status,
}

pub fn handle_info_command() -> Result<()> {
    let release = MintRelease::load().context("loading release information")?;
    let environment = DesktopEnvironment::detect();

    emit(
        Level::Info,
        "welcome.info",
        &format!(
            "{} {} {} '{}'\n{} {} Edition, {}\n{} Desktop: {}",
            char::from(NerdFont::Info),
            release.name,
            release.release,
            release.codename,
            char::from(NerdFont::Desktop),
            release.edition,
            release.architecture,
            char::from(NerdFont::Desktop),
            environment,
        ),
        Some(serde_json::json!({
            "name": release.name,
            "release": release.release,
            "codename": release.codename,
            "edition": release.edition,
            "architecture": release.architecture,
            "lmde": release.is_lmde,
            "desktop": environment.name(),
        })),
    );

    Ok(())
}

pub fn handle_open_command(resource: Resource) -> Result<()> {
    match resource {
        Resource::Documentation => open_url(USER_GUIDE_URL)?,
        Resource::ReleaseNotes => {
            let release = MintRelease::load().context("loading release information")?;
            open_url(&release.release_notes_url)?;
        }
        Resource::NewFeatures => {
            let release = MintRelease::load().context("loading release information")?;
            open_url(&release.new_features_url)?;
        }
        Resource::Forums => open_url("https://forums.linuxmint.com")?,
        Resource::Chat => open_url("irc://irc.spotchat.org/linuxmint-help")?,
        Resource::GetInvolved => open_url("https://linuxmint.com/getinvolved.php")?,
        Resource::Donors => open_url("https://linuxmint.com/donors.php")?,
        Resource::Software => spawn_app("mintinstall")?,
        Resource::Drivers => spawn_app("mintdrivers")?,
    }

    let icon = match resource {
        Resource::Software | Resource::Drivers => NerdFont::ExternalLink,
        _ => NerdFont::Globe,
    };
    emit(
        Level::Debug,
        "welcome.open",
        &format!("{} Launched {resource:?}", char::from(icon)),
        None,
    );
    Ok(())
}

pub fn dispatch_autostart_command(command: AutostartCommands) -> Result<()> {
    match command {
        AutostartCommands::On => {
            autostart::set_enabled(true)?;
            emit(
                Level::Success,
                "welcome.autostart.enabled",
                &format!(
                    "{} Welcome dialog will show on login",
                    char::from(NerdFont::ToggleOn)
                ),
                None,
            );
        }
        AutostartCommands::Off => {
            autostart::set_enabled(false)?;
            emit(
                Level::Success,
                "welcome.autostart.disabled",
                &format!(
                    "{} Welcome dialog will no longer show on login",
                    char::from(NerdFont::ToggleOff)
                ),
                None,
            );
        }
        AutostartCommands::Status => {
            let enabled = autostart::is_enabled()?;
            let (icon, status) = if enabled {
                (NerdFont::ToggleOn, "enabled")
            } else {
                (NerdFont::ToggleOff, "disabled")
            };
            emit(
                Level::Info,
                "welcome.autostart.status",
                &format!("{} Autostart is {status}", char::from(icon)),
                Some(serde_json::json!({ "enabled": enabled })),
            );
        }
    }
    Ok(())
}

//! Xfce settings backend
//!
//! Xfce keeps its configuration in xfconf channels rather than gsettings, so
//! reads and writes go through `xfconf-query`. Property paths start with `/`,
//! which keeps them visually distinct from gsettings keys.

use std::process::Command;

use super::backend::{PanelKeys, SettingKey, SettingsBackend, ThemeSlot, require_tool};
use super::{DesktopEnvironment, DesktopError};

const INTERFACE_THEME: SettingKey = SettingKey::new("xsettings", "/Net/ThemeName");
const ICON_THEME: SettingKey = SettingKey::new("xsettings", "/Net/IconThemeName");
const WM_THEME: SettingKey = SettingKey::new("xfwm4", "/general/theme");

pub(crate) fn theme_key(slot: ThemeSlot) -> Option<SettingKey> {
    match slot {
        ThemeSlot::Interface => Some(INTERFACE_THEME),
        ThemeSlot::Icon => Some(ICON_THEME),
        ThemeSlot::WindowManager => Some(WM_THEME),
        ThemeSlot::Shell => None,
    }
}

#[derive(Debug)]
pub struct XfceBackend;

impl XfceBackend {
    pub fn new() -> Result<Self, DesktopError> {
        require_tool("xfconf-query")?;
        Ok(Self)
    }
}

impl SettingsBackend for XfceBackend {
    fn environment(&self) -> DesktopEnvironment {
        DesktopEnvironment::Xfce
    }

    fn theme_key(&self, slot: ThemeSlot) -> Option<SettingKey> {
        theme_key(slot)
    }

    fn panel_keys(&self) -> Option<&PanelKeys> {
        None
    }

    fn get_string(&self, key: SettingKey) -> Result<String, DesktopError> {
        let output = Command::new("timeout")
            .args(["2s", "xfconf-query", "-c", key.namespace, "-p", key.key])
            .output()
            .map_err(|source| DesktopError::CommandFailed {
                tool: "xfconf-query",
                source,
            })?;

        if !output.status.success() {
            return Err(DesktopError::ReadFailed {
                namespace: key.namespace,
                key: key.key,
                status: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn set_string(&self, key: SettingKey, value: &str) -> Result<(), DesktopError> {
        // --create makes the write succeed whether or not the property exists yet
        let status = Command::new("timeout")
            .args([
                "10s",
                "xfconf-query",
                "-c",
                key.namespace,
                "-p",
                key.key,
                "--create",
                "-t",
                "string",
                "-s",
                value,
            ])
            .status()
            .map_err(|source| DesktopError::CommandFailed {
                tool: "xfconf-query",
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DesktopError::WriteFailed {
                namespace: key.namespace,
                key: key.key,
                status: status.code(),
            })
        }
    }

    fn set_string_list(&self, key: SettingKey, values: &[String]) -> Result<(), DesktopError> {
        let mut args: Vec<&str> = vec![
            "10s",
            "xfconf-query",
            "-c",
            key.namespace,
            "-p",
            key.key,
            "--create",
            "--force-array",
        ];
        for value in values {
            args.push("-t");
            args.push("string");
            args.push("-s");
            args.push(value.as_str());
        }

        let status = Command::new("timeout").args(&args).status().map_err(|source| {
            DesktopError::CommandFailed {
                tool: "xfconf-query",
                source,
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DesktopError::WriteFailed {
                namespace: key.namespace,
                key: key.key,
                status: status.code(),
            })
        }
    }
}

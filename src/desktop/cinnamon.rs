//! Cinnamon settings backend
//!
//! The only backend exposing all four theme slots and the panel layout keys.
//! Everything lives in gsettings under the `org.cinnamon` schemas.

use super::backend::{
    PanelKeys, SettingKey, SettingsBackend, ThemeSlot, gsettings_get, gsettings_set,
    gsettings_set_list, require_tool,
};
use super::{DesktopEnvironment, DesktopError};

const INTERFACE_THEME: SettingKey = SettingKey::new("org.cinnamon.desktop.interface", "gtk-theme");
const ICON_THEME: SettingKey = SettingKey::new("org.cinnamon.desktop.interface", "icon-theme");
const WM_THEME: SettingKey = SettingKey::new("org.cinnamon.desktop.wm.preferences", "theme");
const SHELL_THEME: SettingKey = SettingKey::new("org.cinnamon.theme", "name");

const PANEL_KEYS: PanelKeys = PanelKeys {
    enabled_panels: SettingKey::new("org.cinnamon", "panels-enabled"),
    enabled_applets: SettingKey::new("org.cinnamon", "enabled-applets"),
    panel_heights: SettingKey::new("org.cinnamon", "panels-height"),
    zone_icon_sizes: SettingKey::new("org.cinnamon", "panel-zone-icon-sizes"),
    menu_label: SettingKey::new("org.cinnamon", "app-menu-label"),
};

pub(crate) fn theme_key(slot: ThemeSlot) -> Option<SettingKey> {
    match slot {
        ThemeSlot::Interface => Some(INTERFACE_THEME),
        ThemeSlot::Icon => Some(ICON_THEME),
        ThemeSlot::WindowManager => Some(WM_THEME),
        ThemeSlot::Shell => Some(SHELL_THEME),
    }
}

#[cfg(test)]
pub(crate) fn panel_keys() -> PanelKeys {
    PANEL_KEYS
}

#[derive(Debug)]
pub struct CinnamonBackend;

impl CinnamonBackend {
    pub fn new() -> Result<Self, DesktopError> {
        require_tool("gsettings")?;
        Ok(Self)
    }
}

impl SettingsBackend for CinnamonBackend {
    fn environment(&self) -> DesktopEnvironment {
        DesktopEnvironment::Cinnamon
    }

    fn theme_key(&self, slot: ThemeSlot) -> Option<SettingKey> {
        theme_key(slot)
    }

    fn panel_keys(&self) -> Option<&PanelKeys> {
        Some(&PANEL_KEYS)
    }

    fn get_string(&self, key: SettingKey) -> Result<String, DesktopError> {
        gsettings_get(key)
    }

    fn set_string(&self, key: SettingKey, value: &str) -> Result<(), DesktopError> {
        gsettings_set(key, value)
    }

    fn set_string_list(&self, key: SettingKey, values: &[String]) -> Result<(), DesktopError> {
        gsettings_set_list(key, values)
    }
}

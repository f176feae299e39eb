//! MATE settings backend
//!
//! gsettings based like Cinnamon, but with no shell theme slot: the window
//! manager (Marco) and the interface schemas are all there is.

use super::backend::{
    PanelKeys, SettingKey, SettingsBackend, ThemeSlot, gsettings_get, gsettings_set,
    gsettings_set_list, require_tool,
};
use super::{DesktopEnvironment, DesktopError};

const INTERFACE_THEME: SettingKey = SettingKey::new("org.mate.interface", "gtk-theme");
const ICON_THEME: SettingKey = SettingKey::new("org.mate.interface", "icon-theme");
const WM_THEME: SettingKey = SettingKey::new("org.mate.Marco.general", "theme");

pub(crate) fn theme_key(slot: ThemeSlot) -> Option<SettingKey> {
    match slot {
        ThemeSlot::Interface => Some(INTERFACE_THEME),
        ThemeSlot::Icon => Some(ICON_THEME),
        ThemeSlot::WindowManager => Some(WM_THEME),
        ThemeSlot::Shell => None,
    }
}

#[derive(Debug)]
pub struct MateBackend;

impl MateBackend {
    pub fn new() -> Result<Self, DesktopError> {
        require_tool("gsettings")?;
        Ok(Self)
    }
}

impl SettingsBackend for MateBackend {
    fn environment(&self) -> DesktopEnvironment {
        DesktopEnvironment::Mate
    }

    fn theme_key(&self, slot: ThemeSlot) -> Option<SettingKey> {
        theme_key(slot)
    }

    fn panel_keys(&self) -> Option<&PanelKeys> {
        None
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

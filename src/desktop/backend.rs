//! Settings backend abstraction
//!
//! Each supported desktop environment stores its configuration in a different
//! native store (gsettings schemas for Cinnamon and MATE, xfconf channels for
//! Xfce). The `SettingsBackend` trait hides that behind keyed get/set access
//! so the theme and layout logic stays environment-agnostic.

use std::process::Command;

use super::{DesktopEnvironment, DesktopError};

/// One of the distinct theme identifier purposes a desktop environment may
/// expose. Not every environment has a key for every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSlot {
    Interface,
    Icon,
    WindowManager,
    Shell,
}

impl ThemeSlot {
    pub const ALL: [ThemeSlot; 4] = [
        ThemeSlot::Interface,
        ThemeSlot::Icon,
        ThemeSlot::WindowManager,
        ThemeSlot::Shell,
    ];
}

/// Address of one value inside a native configuration store: a gsettings
/// schema and key, or an xfconf channel and property path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingKey {
    pub namespace: &'static str,
    pub key: &'static str,
}

impl SettingKey {
    pub const fn new(namespace: &'static str, key: &'static str) -> Self {
        Self { namespace, key }
    }
}

/// Keys for panel layout configuration. Only the Cinnamon backend provides
/// these; MATE and Xfce panels are not managed by this tool.
#[derive(Debug, Clone, Copy)]
pub struct PanelKeys {
    pub enabled_panels: SettingKey,
    pub enabled_applets: SettingKey,
    pub panel_heights: SettingKey,
    pub zone_icon_sizes: SettingKey,
    pub menu_label: SettingKey,
}

pub trait SettingsBackend {
    fn environment(&self) -> DesktopEnvironment;

    /// Key holding the identifier for a theme slot, or `None` when this
    /// environment has no such slot.
    fn theme_key(&self, slot: ThemeSlot) -> Option<SettingKey>;

    /// Panel configuration keys, or `None` when this environment's panel is
    /// not managed here.
    fn panel_keys(&self) -> Option<&PanelKeys>;

    fn get_string(&self, key: SettingKey) -> Result<String, DesktopError>;

    fn set_string(&self, key: SettingKey, value: &str) -> Result<(), DesktopError>;

    fn set_string_list(&self, key: SettingKey, values: &[String]) -> Result<(), DesktopError>;
}

pub(crate) fn require_tool(tool: &'static str) -> Result<(), DesktopError> {
    which::which(tool).map_err(|_| DesktopError::MissingTool(tool))?;
    Ok(())
}

// ============================================================================
// gsettings runners (Cinnamon and MATE)
// ============================================================================

/// Read a gsettings key. Wrapped in timeout(1) so a hung DBus session cannot
/// block the caller indefinitely.
pub(crate) fn gsettings_get(key: SettingKey) -> Result<String, DesktopError> {
    let output = Command::new("timeout")
        .args(["2s", "gsettings", "get", key.namespace, key.key])
        .output()
        .map_err(|source| DesktopError::CommandFailed {
            tool: "gsettings",
            source,
        })?;

    if !output.status.success() {
        return Err(DesktopError::ReadFailed {
            namespace: key.namespace,
            key: key.key,
            status: output.status.code(),
        });
    }

    let value = String::from_utf8_lossy(&output.stdout);
    // Remove quotes and whitespace
    Ok(value
        .trim()
        .trim_matches('\'')
        .trim_matches('"')
        .to_string())
}

pub(crate) fn gsettings_set(key: SettingKey, value: &str) -> Result<(), DesktopError> {
    let status = Command::new("timeout")
        .args(["10s", "gsettings", "set", key.namespace, key.key, value])
        .status()
        .map_err(|source| DesktopError::CommandFailed {
            tool: "gsettings",
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

pub(crate) fn gsettings_set_list(key: SettingKey, values: &[String]) -> Result<(), DesktopError> {
    gsettings_set(key, &gvariant_string_list(values))
}

/// Serialize a string array as the GVariant literal gsettings expects,
/// e.g. `['panel1:left:0:menu@cinnamon.org:0', 'panel1:right:0:systray@cinnamon.org:1']`.
fn gvariant_string_list(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|value| format!("'{}'", value.replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

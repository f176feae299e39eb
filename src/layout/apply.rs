//! Applying a panel layout preset to the desktop's panel configuration
//!
//! Only the Cinnamon backend exposes panel keys; applying a preset anywhere
//! else is a no-op reported to the caller. After a successful write the
//! desktop shell is asked to restart so the new layout takes visible effect.

use std::process::Command;

use crate::desktop::{DesktopError, SettingsBackend};
use crate::ui::prelude::*;

use super::presets::{LayoutPreset, PresetData};

/// Single bottom panel, as `panels-enabled` expects it: panel 1, monitor 0
const BOTTOM_PANEL: &str = "1:0:bottom";

pub trait ShellReloader {
    /// Fire-and-forget request for the desktop shell to reload itself so
    /// panel changes become visible.
    fn request_reload(&self);
}

/// Asks Cinnamon to restart over the session bus without waiting for it.
pub struct CinnamonShellReloader;

impl ShellReloader for CinnamonShellReloader {
    fn request_reload(&self) {
        let result = Command::new("dbus-send")
            .args([
                "--session",
                "--dest=org.Cinnamon",
                "--type=method_call",
                "/org/Cinnamon",
                "org.Cinnamon.RestartCinnamon",
            ])
            .spawn();

        if let Err(err) = result {
            emit(
                Level::Debug,
                "layout.reload.error",
                &format!("Shell reload request failed: {err}"),
                None,
            );
        }
    }
}

/// Left zone first, then right zone, each entry in the
/// `panel:zone:position:applet:instance` form Cinnamon stores.
pub fn enabled_applet_entries(data: &PresetData) -> Vec<String> {
    let mut entries = Vec::with_capacity(data.left_applets.len() + data.right_applets.len());

    for (zone, applets) in [("left", data.left_applets), ("right", data.right_applets)] {
        for (position, applet) in applets.iter().enumerate() {
            let instance = entries.len();
            entries.push(format!("panel1:{zone}:{position}:{applet}:{instance}"));
        }
    }

    entries
}

/// The per-zone icon sizes, encoded as the one JSON value the schema stores
/// for all three zones of a panel at once.
pub fn zone_icon_sizes(data: &PresetData) -> String {
    serde_json::json!([{
        "panelId": 1,
        "left": data.left_icon_size,
        "center": data.center_icon_size,
        "right": data.right_icon_size,
    }])
    .to_string()
}

/// Write the preset's panel configuration and request a shell reload.
///
/// Returns `false` when the backend has no panel keys (MATE, Xfce); nothing
/// is written and no reload is requested in that case.
pub fn apply_preset(
    backend: &dyn SettingsBackend,
    preset: LayoutPreset,
    reloader: &dyn ShellReloader,
) -> Result<bool, DesktopError> {
    let Some(keys) = backend.panel_keys() else {
        return Ok(false);
    };

    let data = preset.data();

    backend.set_string_list(keys.enabled_panels, &[BOTTOM_PANEL.to_string()])?;
    backend.set_string_list(keys.enabled_applets, &enabled_applet_entries(data))?;
    backend.set_string_list(keys.panel_heights, &[format!("1:{}", data.panel_height)])?;
    backend.set_string(keys.zone_icon_sizes, &zone_icon_sizes(data))?;
    backend.set_string(keys.menu_label, data.menu_label.unwrap_or(""))?;

    reloader.request_reload();
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::desktop::fake::FakeBackend;

    #[derive(Default)]
    struct RecordingReloader {
        requested: Cell<bool>,
    }

    impl ShellReloader for RecordingReloader {
        fn request_reload(&self) {
            self.requested.set(true);
        }
    }

    #[test]
    fn applet_list_concatenates_left_then_right() {
        for preset in LayoutPreset::ALL {
            let data = preset.data();
            let entries = enabled_applet_entries(data);
            assert_eq!(
                entries.len(),
                data.left_applets.len() + data.right_applets.len(),
                "{preset}",
            );
            assert!(entries[0].starts_with("panel1:left:0:"));
            assert!(entries.last().unwrap().starts_with("panel1:right:"));
        }
    }

    #[test]
    fn applet_instances_are_unique_across_zones() {
        let entries = enabled_applet_entries(LayoutPreset::Modern.data());
        let mut instances: Vec<&str> = entries
            .iter()
            .map(|entry| entry.rsplit(':').next().unwrap())
            .collect();
        instances.sort_unstable();
        instances.dedup();
        assert_eq!(instances.len(), entries.len());
    }

    #[test]
    fn apply_writes_a_single_bottom_panel() {
        let backend = FakeBackend::cinnamon();
        let keys = *backend.panel_keys().unwrap();
        let reloader = RecordingReloader::default();

        let applied = apply_preset(&backend, LayoutPreset::Legacy, &reloader).unwrap();
        assert!(applied);
        assert_eq!(
            backend.list(keys.enabled_panels).unwrap(),
            vec!["1:0:bottom".to_string()]
        );
        assert_eq!(
            backend.list(keys.panel_heights).unwrap(),
            vec!["1:27".to_string()]
        );
        assert!(reloader.requested.get());
    }

    #[test]
    fn apply_writes_menu_label_and_icon_sizes() {
        let backend = FakeBackend::cinnamon();
        let keys = *backend.panel_keys().unwrap();
        let reloader = RecordingReloader::default();

        apply_preset(&backend, LayoutPreset::Legacy, &reloader).unwrap();
        assert_eq!(backend.string(keys.menu_label).unwrap(), "Menu");

        let sizes: serde_json::Value =
            serde_json::from_str(&backend.string(keys.zone_icon_sizes).unwrap()).unwrap();
        assert_eq!(sizes[0]["panelId"], 1);
        assert_eq!(sizes[0]["right"], 16);

        // icon-only presets blank the label
        apply_preset(&backend, LayoutPreset::Modern, &reloader).unwrap();
        assert_eq!(backend.string(keys.menu_label).unwrap(), "");
    }

    #[test]
    fn apply_skips_backends_without_panel_keys() {
        let backend = FakeBackend::mate();
        let reloader = RecordingReloader::default();

        let applied = apply_preset(&backend, LayoutPreset::Modern, &reloader).unwrap();
        assert!(!applied);
        assert_eq!(backend.write_count(), 0);
        assert!(!reloader.requested.get());
    }
}

//! Panel layout presets
//!
//! A small closed set of named layouts, each a static bundle of panel
//! parameters. Presets are write-only actions: there is no "current preset"
//! to read back, unlike the appearance state.

use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// Traditional layout with a window list and a labelled menu
    Legacy,
    /// Grouped window list on a taller panel, icon-only menu
    Modern,
    /// Modern layout scaled up for large or high-DPI displays
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetData {
    pub title: &'static str,
    pub description: &'static str,
    /// Applet identifiers for the left panel zone, in order
    pub left_applets: &'static [&'static str],
    /// Applet identifiers for the right panel zone, in order
    pub right_applets: &'static [&'static str],
    /// Panel thickness in pixels
    pub panel_height: u32,
    pub left_icon_size: u32,
    pub center_icon_size: u32,
    pub right_icon_size: u32,
    /// Text shown next to the menu icon; `None` means icon-only
    pub menu_label: Option<&'static str>,
}

const STATUS_APPLETS: &[&str] = &[
    "systray@cinnamon.org",
    "xapp-status@cinnamon.org",
    "notifications@cinnamon.org",
    "printers@cinnamon.org",
    "removable-drives@cinnamon.org",
    "keyboard@cinnamon.org",
    "network@cinnamon.org",
    "sound@cinnamon.org",
    "power@cinnamon.org",
    "calendar@cinnamon.org",
];

static LEGACY: PresetData = PresetData {
    title: "Traditional",
    description: "A classic bottom panel with a window list and a labelled menu.",
    left_applets: &[
        "menu@cinnamon.org",
        "show-desktop@cinnamon.org",
        "panel-launchers@cinnamon.org",
        "window-list@cinnamon.org",
    ],
    right_applets: STATUS_APPLETS,
    panel_height: 27,
    left_icon_size: 0,
    center_icon_size: 0,
    right_icon_size: 16,
    menu_label: Some("Menu"),
};

static MODERN: PresetData = PresetData {
    title: "Modern",
    description: "A taller panel with grouped windows and an icon-only menu.",
    left_applets: &["menu@cinnamon.org", "grouped-window-list@cinnamon.org"],
    right_applets: STATUS_APPLETS,
    panel_height: 40,
    left_icon_size: 0,
    center_icon_size: 0,
    right_icon_size: 24,
    menu_label: None,
};

static LARGE: PresetData = PresetData {
    title: "Large",
    description: "The modern layout with bigger icons for large displays.",
    left_applets: &["menu@cinnamon.org", "grouped-window-list@cinnamon.org"],
    right_applets: STATUS_APPLETS,
    panel_height: 60,
    left_icon_size: 0,
    center_icon_size: 0,
    right_icon_size: 32,
    menu_label: None,
};

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [
        LayoutPreset::Legacy,
        LayoutPreset::Modern,
        LayoutPreset::Large,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LayoutPreset::Legacy => "legacy",
            LayoutPreset::Modern => "modern",
            LayoutPreset::Large => "large",
        }
    }

    pub fn data(self) -> &'static PresetData {
        match self {
            LayoutPreset::Legacy => &LEGACY,
            LayoutPreset::Modern => &MODERN,
            LayoutPreset::Large => &LARGE,
        }
    }
}

impl std::fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

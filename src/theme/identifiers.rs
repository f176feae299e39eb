//! Theme identifier composition and parsing
//!
//! The appearance state is a palette plus a dark mode bit; every theme name
//! the desktop stores is derived from it. The four slots follow different
//! composition rules and those asymmetries are contracts of the Mint-Y theme
//! family, not simplifiable to one suffixed name:
//!
//! - interface: `Mint-Y`, `-Dark` iff dark mode, `-<Color>` iff non-default
//! - icons: never dark, `-<Color>` iff non-default
//! - window manager: always the bare base name
//! - shell: always dark based, `-<Color>` iff non-default, regardless of the
//!   dark mode bit

use crate::desktop::ThemeSlot;

use super::palette::Palette;

/// Root identifier every derived theme name starts with
pub const BASE_THEME: &str = "Mint-Y";

/// Dark variant of the base, used both as the dark interface prefix and as
/// the shell theme root
pub const DARK_BASE_THEME: &str = "Mint-Y-Dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppearanceState {
    pub palette: Palette,
    pub dark_mode: bool,
}

/// The derived theme names for all four slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIdentifierSet {
    pub interface: String,
    pub icon: String,
    pub window_manager: String,
    pub shell: String,
}

impl ThemeIdentifierSet {
    pub fn compose(state: AppearanceState) -> Self {
        let mut interface = if state.dark_mode {
            DARK_BASE_THEME.to_string()
        } else {
            BASE_THEME.to_string()
        };
        let mut icon = BASE_THEME.to_string();
        let mut shell = DARK_BASE_THEME.to_string();

        if !state.palette.is_default() {
            let suffix = state.palette.suffix();
            interface = format!("{interface}-{suffix}");
            icon = format!("{icon}-{suffix}");
            shell = format!("{shell}-{suffix}");
        }

        Self {
            interface,
            icon,
            window_manager: BASE_THEME.to_string(),
            shell,
        }
    }

    pub fn get(&self, slot: ThemeSlot) -> &str {
        match slot {
            ThemeSlot::Interface => &self.interface,
            ThemeSlot::Icon => &self.icon,
            ThemeSlot::WindowManager => &self.window_manager,
            ThemeSlot::Shell => &self.shell,
        }
    }
}

/// Recover the appearance state from a stored interface theme name.
///
/// Theme names not derived from the base name were set by some other tool;
/// they resolve to the default state rather than an error. An unrecognized
/// color suffix falls back to the default palette but keeps the dark bit.
pub fn parse_interface_theme(theme: &str) -> AppearanceState {
    if !theme.starts_with(BASE_THEME) {
        return AppearanceState::default();
    }

    let dark_mode = theme.starts_with(DARK_BASE_THEME);
    let rest = if dark_mode {
        &theme[DARK_BASE_THEME.len()..]
    } else {
        &theme[BASE_THEME.len()..]
    };

    // Nothing left, or only a stray separator
    if rest.len() <= 1 {
        return AppearanceState {
            palette: Palette::default(),
            dark_mode,
        };
    }

    let palette = rest
        .get(1..)
        .and_then(Palette::from_id)
        .unwrap_or_default();

    AppearanceState { palette, dark_mode }
}

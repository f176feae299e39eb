//! Accent color palette
//!
//! The closed set of selectable accent colors. Green is the default and
//! contributes no suffix to derived theme names. Anything parsed from
//! external input that is not in this set falls back to green.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Green,
    Aqua,
    Teal,
    Blue,
    Sand,
    Brown,
    Grey,
    Orange,
    Red,
    Pink,
    Purple,
}

impl Palette {
    pub const ALL: [Palette; 11] = [
        Palette::Green,
        Palette::Aqua,
        Palette::Teal,
        Palette::Blue,
        Palette::Sand,
        Palette::Brown,
        Palette::Grey,
        Palette::Orange,
        Palette::Red,
        Palette::Pink,
        Palette::Purple,
    ];

    /// Lowercase identifier used on the CLI and in parsing
    pub fn id(self) -> &'static str {
        match self {
            Palette::Green => "green",
            Palette::Aqua => "aqua",
            Palette::Teal => "teal",
            Palette::Blue => "blue",
            Palette::Sand => "sand",
            Palette::Brown => "brown",
            Palette::Grey => "grey",
            Palette::Orange => "orange",
            Palette::Red => "red",
            Palette::Pink => "pink",
            Palette::Purple => "purple",
        }
    }

    /// Capitalized form used as a theme name suffix, e.g. `Aqua` in
    /// `Mint-Y-Aqua`
    pub fn suffix(self) -> &'static str {
        match self {
            Palette::Green => "Green",
            Palette::Aqua => "Aqua",
            Palette::Teal => "Teal",
            Palette::Blue => "Blue",
            Palette::Sand => "Sand",
            Palette::Brown => "Brown",
            Palette::Grey => "Grey",
            Palette::Orange => "Orange",
            Palette::Red => "Red",
            Palette::Pink => "Pink",
            Palette::Purple => "Purple",
        }
    }

    /// Case-insensitive lookup against the closed set. Returns `None` for
    /// anything unrecognized; callers decide whether that is a fallback or
    /// an error.
    pub fn from_id(id: &str) -> Option<Palette> {
        let normalized = id.to_lowercase();
        Palette::ALL
            .into_iter()
            .find(|palette| palette.id() == normalized)
    }

    pub fn is_default(self) -> bool {
        self == Palette::Green
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_is_case_insensitive() {
        assert_eq!(Palette::from_id("Aqua"), Some(Palette::Aqua));
        assert_eq!(Palette::from_id("PURPLE"), Some(Palette::Purple));
        assert_eq!(Palette::from_id("teal"), Some(Palette::Teal));
    }

    #[test]
    fn from_id_rejects_unknown_colors() {
        assert_eq!(Palette::from_id("xyzzy"), None);
        assert_eq!(Palette::from_id(""), None);
    }

    #[test]
    fn green_is_the_default() {
        assert_eq!(Palette::default(), Palette::Green);
        assert!(Palette::Green.is_default());
        assert!(!Palette::Blue.is_default());
    }

    #[test]
    fn ids_round_trip_for_every_color() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_id(palette.id()), Some(palette));
            assert_eq!(Palette::from_id(palette.suffix()), Some(palette));
        }
    }
}

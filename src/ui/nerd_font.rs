/// Curated nerd font icons used in mintwelcome output
///
/// A small fixed set rather than the full nerd_fonts crate: every icon here
/// is actually rendered somewhere in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    // Status and feedback
    Check,          //
    Cross,          //
    Warning,        //
    Info,           //

    // Appearance
    Palette,        //
    Moon,           //
    Sun,            //

    // Desktop and resources
    Desktop,        //
    Globe,          //
    ExternalLink,   //
    List,           //
    Refresh,        //
    ToggleOn,       //
    ToggleOff,      //
}

impl NerdFont {
    /// Get the Unicode character for this nerd font icon
    pub const fn unicode(&self) -> char {
        match self {
            // Status and feedback
            Self::Check => '\u{f00c}',          // fa-check
            Self::Cross => '\u{f00d}',          // fa-times
            Self::Warning => '\u{f071}',        // fa-exclamation-triangle
            Self::Info => '\u{f05a}',           // fa-info-circle

            // Appearance
            Self::Palette => '\u{f53f}',        // fa-palette
            Self::Moon => '\u{f186}',           // fa-moon
            Self::Sun => '\u{f185}',            // fa-sun

            // Desktop and resources
            Self::Desktop => '\u{f108}',        // fa-desktop
            Self::Globe => '\u{f0ac}',          // fa-globe
            Self::ExternalLink => '\u{f08e}',   // fa-external-link
            Self::List => '\u{f03a}',           // fa-list
            Self::Refresh => '\u{f021}',        // fa-refresh
            Self::ToggleOn => '\u{f205}',       // fa-toggle-on
            Self::ToggleOff => '\u{f204}',      // fa-toggle-off
        }
    }
}

impl std::fmt::Display for NerdFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode())
    }
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        icon.unicode()
    }
}

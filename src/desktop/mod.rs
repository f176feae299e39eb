//! Desktop environment detection and settings backends
//!
//! The tool supports the three desktop families Linux Mint ships: Cinnamon,
//! MATE, and Xfce. The environment is detected once at startup and turned
//! into a `SettingsBackend` trait object; everything downstream is
//! backend-agnostic.

pub mod backend;
mod cinnamon;
mod mate;
mod xfce;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{PanelKeys, SettingKey, SettingsBackend, ThemeSlot};
pub use cinnamon::CinnamonBackend;
pub use mate::MateBackend;
pub use xfce::XfceBackend;

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("unsupported desktop environment '{0}'")]
    UnsupportedEnvironment(String),

    #[error("required tool '{0}' not found in PATH")]
    MissingTool(&'static str),

    #[error("failed to run {tool}: {source}")]
    CommandFailed {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("reading {namespace} {key} failed with status {status:?}")]
    ReadFailed {
        namespace: &'static str,
        key: &'static str,
        status: Option<i32>,
    },

    #[error("writing {namespace} {key} failed with status {status:?}")]
    WriteFailed {
        namespace: &'static str,
        key: &'static str,
        status: Option<i32>,
    },
}

/// Desktop environment families with a settings backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopEnvironment {
    /// Cinnamon (including the X-Cinnamon session tag)
    Cinnamon,
    /// MATE
    Mate,
    /// Xfce
    Xfce,
    /// Anything else, kept with its raw tag for error reporting
    Other(String),
}

impl DesktopEnvironment {
    /// Detect the current desktop environment from the session environment.
    pub fn detect() -> Self {
        let mut raw = String::new();

        for var in ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"] {
            if let Ok(value) = env::var(var) {
                let environment = Self::from_tag(&value);
                if !matches!(environment, Self::Other(_)) {
                    return environment;
                }
                if raw.is_empty() {
                    raw = value;
                }
            }
        }

        if raw.is_empty() {
            raw = "unknown".to_string();
        }
        Self::Other(raw)
    }

    /// Classify a desktop tag such as `X-Cinnamon`, `MATE`, or `XFCE`.
    /// Tags may be colon-separated lists, so matching is by substring.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.to_lowercase();
        if normalized.contains("cinnamon") {
            Self::Cinnamon
        } else if normalized.contains("mate") {
            Self::Mate
        } else if normalized.contains("xfce") {
            Self::Xfce
        } else {
            Self::Other(tag.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Cinnamon => "Cinnamon",
            Self::Mate => "MATE",
            Self::Xfce => "Xfce",
            Self::Other(tag) => tag,
        }
    }

    /// Construct the settings backend for this environment. Fails for
    /// unrecognized environments: there is nothing sensible to read or write.
    pub fn backend(&self) -> Result<Box<dyn SettingsBackend>, DesktopError> {
        match self {
            Self::Cinnamon => Ok(Box::new(CinnamonBackend::new()?)),
            Self::Mate => Ok(Box::new(MateBackend::new()?)),
            Self::Xfce => Ok(Box::new(XfceBackend::new()?)),
            Self::Other(tag) => Err(DesktopError::UnsupportedEnvironment(tag.clone())),
        }
    }
}

impl std::fmt::Display for DesktopEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn from_tag_recognizes_cinnamon_session() {
        assert_eq!(
            DesktopEnvironment::from_tag("X-Cinnamon"),
            DesktopEnvironment::Cinnamon
        );
        assert_eq!(
            DesktopEnvironment::from_tag("cinnamon"),
            DesktopEnvironment::Cinnamon
        );
    }

    #[test]
    fn from_tag_recognizes_mate_and_xfce() {
        assert_eq!(DesktopEnvironment::from_tag("MATE"), DesktopEnvironment::Mate);
        assert_eq!(DesktopEnvironment::from_tag("XFCE"), DesktopEnvironment::Xfce);
    }

    #[test]
    fn from_tag_keeps_unknown_tag() {
        assert_eq!(
            DesktopEnvironment::from_tag("KDE"),
            DesktopEnvironment::Other("KDE".to_string())
        );
    }

    #[test]
    fn unsupported_environment_has_no_backend() {
        let environment = DesktopEnvironment::Other("KDE".to_string());
        let Err(err) = environment.backend() else {
            panic!("expected no backend for an unrecognized environment");
        };
        assert!(matches!(err, DesktopError::UnsupportedEnvironment(tag) if tag == "KDE"));
    }

    #[test]
    fn backend_reports_its_environment() {
        let backend = fake::FakeBackend::mate();
        assert_eq!(backend.environment(), DesktopEnvironment::Mate);
        assert_eq!(
            fake::FakeBackend::cinnamon().environment(),
            DesktopEnvironment::Cinnamon
        );
    }

    #[test]
    #[serial]
    fn detect_reads_xdg_current_desktop() {
        unsafe {
            env::set_var("XDG_CURRENT_DESKTOP", "X-Cinnamon");
            env::remove_var("DESKTOP_SESSION");
        }
        assert_eq!(DesktopEnvironment::detect(), DesktopEnvironment::Cinnamon);
    }

    #[test]
    #[serial]
    fn detect_falls_back_to_desktop_session() {
        unsafe {
            env::set_var("XDG_CURRENT_DESKTOP", "Unity");
            env::set_var("DESKTOP_SESSION", "mate");
        }
        assert_eq!(DesktopEnvironment::detect(), DesktopEnvironment::Mate);
    }

    #[test]
    #[serial]
    fn detect_reports_unknown_environment() {
        unsafe {
            env::set_var("XDG_CURRENT_DESKTOP", "Unity");
            env::remove_var("DESKTOP_SESSION");
        }
        assert_eq!(
            DesktopEnvironment::detect(),
            DesktopEnvironment::Other("Unity".to_string())
        );
    }
}

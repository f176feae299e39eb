//! Release information from the distro info file
//!
//! `/etc/linuxmint/info` is a flat KEY=VALUE file installed by the base
//! system; it carries the release number, codename, edition, desktop, and
//! the release-specific documentation URLs.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const INFO_FILE: &str = "/etc/linuxmint/info";

/// LMDE installs ship this package; its presence distinguishes the Debian
/// edition from the Ubuntu-based releases.
const LMDE_MARKER: &str = "/usr/share/doc/debian-system-adjustments/copyright";

pub const USER_GUIDE_URL: &str = "https://linuxmint.com/documentation.php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRelease {
    pub name: &'static str,
    pub release: String,
    pub codename: String,
    pub edition: String,
    pub desktop: String,
    pub release_notes_url: String,
    pub new_features_url: String,
    pub architecture: &'static str,
    pub is_lmde: bool,
}

impl MintRelease {
    pub fn load() -> Result<Self> {
        let content = fs::read_to_string(INFO_FILE)
            .with_context(|| format!("reading distro info from {INFO_FILE}"))?;
        Self::parse(&content, Path::new(LMDE_MARKER).exists())
    }

    pub(crate) fn parse(content: &str, is_lmde: bool) -> Result<Self> {
        let mut fields = BTreeMap::new();
        for line in content.lines() {
            if let Some((key, value)) = line.trim().split_once('=') {
                fields.insert(key, value);
            }
        }

        let field = |key: &str| -> Result<String> {
            fields
                .get(key)
                .map(|value| value.trim_matches('"').to_string())
                .with_context(|| format!("missing {key} in {INFO_FILE}"))
        };

        let architecture = if std::env::consts::ARCH == "x86_64" {
            "64-bit"
        } else {
            "32-bit"
        };

        Ok(Self {
            name: if is_lmde { "LMDE" } else { "Linux Mint" },
            release: field("RELEASE")?,
            codename: capitalize(&field("CODENAME")?),
            edition: field("EDITION")?,
            desktop: field("DESKTOP")?,
            release_notes_url: field("RELEASE_NOTES_URL")?,
            new_features_url: field("NEW_FEATURES_URL")?,
            architecture,
            is_lmde,
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"RELEASE=21.3
CODENAME=virginia
EDITION="Cinnamon"
DESKTOP=Cinnamon
TOOLKIT=GTK
NEW_FEATURES_URL=https://www.linuxmint.com/rel_virginia_cinnamon_whatsnew.php
RELEASE_NOTES_URL=https://www.linuxmint.com/rel_virginia_cinnamon.php
"#;

    #[test]
    fn parses_the_info_file_fields() {
        let release = MintRelease::parse(SAMPLE, false).unwrap();
        assert_eq!(release.name, "Linux Mint");
        assert_eq!(release.release, "21.3");
        assert_eq!(release.codename, "Virginia");
        assert_eq!(release.edition, "Cinnamon");
        assert_eq!(release.desktop, "Cinnamon");
        assert!(release.release_notes_url.ends_with("rel_virginia_cinnamon.php"));
        assert!(!release.is_lmde);
    }

    #[test]
    fn quotes_are_stripped_and_codename_capitalized() {
        let content = "RELEASE=6\nCODENAME=faye\nEDITION=\"Cinnamon\"\nDESKTOP=Cinnamon\nRELEASE_NOTES_URL=u\nNEW_FEATURES_URL=v\n";
        let release = MintRelease::parse(content, true).unwrap();
        assert_eq!(release.name, "LMDE");
        assert_eq!(release.codename, "Faye");
        assert_eq!(release.edition, "Cinnamon");
        assert!(release.is_lmde);
    }

    #[test]
    fn missing_keys_are_an_error() {
        let err = MintRelease::parse("RELEASE=21.3\n", false).unwrap_err();
        assert!(err.to_string().contains("CODENAME"));
    }
}
